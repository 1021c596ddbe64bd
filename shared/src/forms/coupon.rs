use crate::models::{Coupon, CouponDraft};
use crate::validation::{self, FormError, MAX_CODE_LEN};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CouponForm {
    pub code: String,
    pub discount: String,
    pub expiry: String,
    pub active: bool,
}

impl CouponForm {
    pub fn new(code: impl Into<String>, discount: impl Into<String>, expiry: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            discount: discount.into(),
            expiry: expiry.into(),
            active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Prefill from an existing coupon (edit dialog).
    pub fn from_coupon(coupon: &Coupon) -> Self {
        Self {
            code: coupon.code.clone(),
            discount: coupon.discount.to_string(),
            expiry: coupon.expiry.clone(),
            active: coupon.active,
        }
    }

    /// Code required, discount a percentage in (0, 100], expiry a real date.
    pub fn validate(&self) -> Result<CouponDraft, FormError> {
        let code = validation::required_text(&self.code, "code", MAX_CODE_LEN)?;
        let discount = validation::number(&self.discount, "discount")?;
        if discount <= 0.0 || discount > 100.0 {
            return Err(FormError::OutOfRange {
                field: "discount",
                min: 0.0,
                max: 100.0,
            });
        }
        let expiry = validation::date(&self.expiry, "expiry")?;
        Ok(CouponDraft {
            code,
            discount,
            expiry: expiry.format("%Y-%m-%d").to_string(),
            active: self.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coupon() {
        let draft = CouponForm::new(" EID10 ", "10", "2025-04-10").validate().unwrap();
        assert_eq!(draft.code, "EID10");
        assert_eq!(draft.discount, 10.0);
        assert!(draft.active);
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert_eq!(
            CouponForm::new("", "10", "2025-04-10").validate(),
            Err(FormError::Required { field: "code" })
        );
        assert_eq!(
            CouponForm::new("EID", "", "2025-04-10").validate(),
            Err(FormError::Required { field: "discount" })
        );
    }

    #[test]
    fn test_discount_range() {
        for bad in ["0", "-5", "100.5"] {
            assert!(matches!(
                CouponForm::new("EID", bad, "2025-04-10").validate(),
                Err(FormError::OutOfRange { field: "discount", .. })
            ));
        }
        assert!(CouponForm::new("EID", "100", "2025-04-10").validate().is_ok());
        assert!(matches!(
            CouponForm::new("EID", "ten", "2025-04-10").validate(),
            Err(FormError::NotNumeric { .. })
        ));
    }
}
