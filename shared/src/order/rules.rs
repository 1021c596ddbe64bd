use thiserror::Error;

use crate::models::{Order, OrderStatus, PaymentProof, ProofStatus};

/// Statuses reachable through a status update. Cancellation has its own
/// operation so it always carries a reason.
pub const STATUS_UPDATE_TARGETS: [OrderStatus; 4] = [
    OrderStatus::Pending,
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
];

/// An order action that is not available in the current state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("no order is loaded")]
    NoOrderLoaded,

    #[error("status cannot be set to {0} here, cancel the order instead")]
    StatusNotAllowed(OrderStatus),

    #[error("order is {0} and its status can no longer change")]
    Terminal(OrderStatus),

    #[error("order is {0} and cannot be cancelled")]
    NotCancellable(OrderStatus),

    #[error("order has no payment proof")]
    NoPaymentProof,

    #[error("payment proof is already {0}")]
    ProofAlreadyReviewed(ProofStatus),
}

pub fn check_status_update(current: OrderStatus, target: OrderStatus) -> Result<(), WorkflowError> {
    if !STATUS_UPDATE_TARGETS.contains(&target) {
        return Err(WorkflowError::StatusNotAllowed(target));
    }
    if current.is_terminal() {
        return Err(WorkflowError::Terminal(current));
    }
    Ok(())
}

pub fn check_cancel(current: OrderStatus) -> Result<(), WorkflowError> {
    if current.is_terminal() {
        return Err(WorkflowError::NotCancellable(current));
    }
    Ok(())
}

pub fn check_verification(proof: Option<&PaymentProof>) -> Result<(), WorkflowError> {
    match proof {
        None => Err(WorkflowError::NoPaymentProof),
        Some(proof) if !proof.is_pending() => Err(WorkflowError::ProofAlreadyReviewed(proof.status)),
        Some(_) => Ok(()),
    }
}

/// Controls the order detail view shows for the current state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderActions {
    pub status_targets: Vec<OrderStatus>,
    pub can_cancel: bool,
    pub can_add_note: bool,
    pub can_verify_payment: bool,
}

impl OrderActions {
    pub fn for_order(order: &Order, proof: Option<&PaymentProof>) -> Self {
        let status_targets = if order.status.is_terminal() {
            Vec::new()
        } else {
            STATUS_UPDATE_TARGETS.to_vec()
        };
        Self {
            status_targets,
            can_cancel: check_cancel(order.status).is_ok(),
            can_add_note: true,
            can_verify_payment: check_verification(proof).is_ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: OrderStatus) -> Order {
        serde_json::from_value(serde_json::json!({ "id": "o1", "status": status })).unwrap()
    }

    fn proof(status: ProofStatus) -> PaymentProof {
        PaymentProof {
            transaction_id: "TX1".into(),
            sender_number: "01700000000".into(),
            sender_name: "Rahim".into(),
            amount: 1200.0,
            status,
            admin_notes: None,
            submitted_at: None,
            verified_at: None,
        }
    }

    #[test]
    fn test_cancel_unavailable_for_terminal_orders() {
        for status in [OrderStatus::Delivered, OrderStatus::Cancelled] {
            let actions = OrderActions::for_order(&order(status), None);
            assert!(!actions.can_cancel);
            assert!(actions.status_targets.is_empty());
            assert!(actions.can_add_note);
            assert_eq!(check_cancel(status), Err(WorkflowError::NotCancellable(status)));
        }
        for status in [OrderStatus::Pending, OrderStatus::Processing, OrderStatus::Shipped] {
            assert!(OrderActions::for_order(&order(status), None).can_cancel);
        }
    }

    #[test]
    fn test_status_update_targets() {
        assert_eq!(
            check_status_update(OrderStatus::Pending, OrderStatus::Cancelled),
            Err(WorkflowError::StatusNotAllowed(OrderStatus::Cancelled))
        );
        // skipping steps is allowed
        assert!(check_status_update(OrderStatus::Pending, OrderStatus::Delivered).is_ok());
        assert_eq!(
            check_status_update(OrderStatus::Delivered, OrderStatus::Shipped),
            Err(WorkflowError::Terminal(OrderStatus::Delivered))
        );
    }

    #[test]
    fn test_verification_needs_pending_proof() {
        let shipped = order(OrderStatus::Shipped);
        assert!(!OrderActions::for_order(&shipped, None).can_verify_payment);
        assert!(OrderActions::for_order(&shipped, Some(&proof(ProofStatus::Pending))).can_verify_payment);
        assert_eq!(
            check_verification(Some(&proof(ProofStatus::Verified))),
            Err(WorkflowError::ProofAlreadyReviewed(ProofStatus::Verified))
        );
    }
}
