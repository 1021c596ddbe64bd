use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use shared::models::{
    AdminNoteRequest, CancelOrderRequest, Order, OrderStatus, PaymentProof, StatusUpdateRequest,
    VerificationDecision, VerifyPaymentRequest,
};
use shared::order::{self, OrderActions, WorkflowError};
use shared::validation::{self, MAX_CODE_LEN, MAX_NOTE_LEN};
use tracing::{info, warn};

use crate::api::AdminApi;
use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

#[derive(Debug, Default)]
struct WorkflowState {
    order_id: Option<String>,
    order: Option<Order>,
    proof: Option<PaymentProof>,
    selected_status: Option<OrderStatus>,
}

/// Clears the in-flight flag when the mutation finishes, however it ends.
struct UpdateGuard<'a>(&'a AtomicBool);

impl Drop for UpdateGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Coordinator for one order's detail view
///
/// Holds the loaded order and its payment proof and runs the administrative
/// actions against the API. Each action is a single request followed by a
/// re-fetch; nothing is updated optimistically and nothing is retried. While
/// one action is in flight every other action fails with
/// [`ClientError::Busy`] without sending a request. A failed action leaves the
/// loaded order and proof as they were.
pub struct OrderWorkflow<'a, C> {
    api: &'a AdminApi<C>,
    state: Mutex<WorkflowState>,
    updating: AtomicBool,
}

impl<'a, C: HttpClient> OrderWorkflow<'a, C> {
    pub fn new(api: &'a AdminApi<C>) -> Self {
        Self {
            api,
            state: Mutex::new(WorkflowState::default()),
            updating: AtomicBool::new(false),
        }
    }

    fn state(&self) -> MutexGuard<'_, WorkflowState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// GET /orders/{id}
    ///
    /// A missing or blank id fails with `NotFound` before any request. The id
    /// is remembered even when the load fails so [`reload`](Self::reload)
    /// can retry it. Switching to another id drops the previous order and its
    /// payment proof first, so a failed switch leaves no order loaded.
    pub async fn load_order(&self, id: Option<&str>) -> ClientResult<Order> {
        let id = id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ClientError::NotFound("Order ID is missing".to_string()))?
            .to_string();
        {
            let mut state = self.state();
            if state.order_id.as_deref() != Some(id.as_str()) {
                *state = WorkflowState {
                    order_id: Some(id.clone()),
                    ..WorkflowState::default()
                };
            }
        }

        let order = self.api.orders().get(&id).await.inspect_err(|e| {
            warn!(order_id = %id, error = %e, "failed to load order");
        })?;

        let mut state = self.state();
        state.selected_status = Some(order.status);
        state.order = Some(order.clone());
        Ok(order)
    }

    /// Retry the last load.
    pub async fn reload(&self) -> ClientResult<Order> {
        let id = self.state().order_id.clone();
        self.load_order(id.as_deref()).await
    }

    /// GET /orders/{id}/payment-proof; no proof is `Ok(None)`.
    pub async fn load_payment_proof(&self) -> ClientResult<Option<PaymentProof>> {
        let id = self.loaded_id()?;
        let proof = self.api.orders().payment_proof(&id).await?;
        self.state().proof = proof.clone();
        Ok(proof)
    }

    // ── View state ──────────────────────────────────────────────────

    pub fn order(&self) -> Option<Order> {
        self.state().order.clone()
    }

    pub fn payment_proof(&self) -> Option<PaymentProof> {
        self.state().proof.clone()
    }

    /// Status shown by the status selector; starts at the loaded order's.
    pub fn selected_status(&self) -> Option<OrderStatus> {
        self.state().selected_status
    }

    pub fn select_status(&self, status: OrderStatus) {
        self.state().selected_status = Some(status);
    }

    pub fn is_updating(&self) -> bool {
        self.updating.load(Ordering::Acquire)
    }

    pub fn available_actions(&self) -> OrderActions {
        let state = self.state();
        match &state.order {
            Some(order) => OrderActions::for_order(order, state.proof.as_ref()),
            None => OrderActions::default(),
        }
    }

    // ── Actions ─────────────────────────────────────────────────────

    /// PUT /orders/{id}/status, then re-fetch the order.
    pub async fn update_status(&self, status: OrderStatus, tracking_number: Option<&str>) -> ClientResult<Order> {
        let (id, current) = self.loaded()?;
        order::check_status_update(current, status)?;
        let tracking_number = validation::optional_text(tracking_number, "tracking number", MAX_CODE_LEN)?;
        let _guard = self.begin_update()?;

        let request = StatusUpdateRequest {
            status,
            tracking_number,
        };
        self.api.orders().update_status(&id, &request).await?;
        info!(order_id = %id, from = %current, to = %status, "order status updated");
        self.refetch(&id).await
    }

    /// PUT /orders/{id}/cancel, then re-fetch the order.
    pub async fn cancel_order(&self, reason: &str) -> ClientResult<Order> {
        let (id, current) = self.loaded()?;
        order::check_cancel(current)?;
        let reason = validation::required_text(reason, "cancellation reason", MAX_NOTE_LEN)?;
        let _guard = self.begin_update()?;

        self.api.orders().cancel(&id, &CancelOrderRequest { reason }).await?;
        info!(order_id = %id, "order cancelled");
        self.refetch(&id).await
    }

    /// POST /orders/{id}/notes, then re-fetch the order.
    pub async fn add_admin_note(&self, note: &str) -> ClientResult<Order> {
        let (id, _) = self.loaded()?;
        let note = validation::required_text(note, "note", MAX_NOTE_LEN)?;
        let _guard = self.begin_update()?;

        self.api.orders().add_note(&id, &AdminNoteRequest { note }).await?;
        info!(order_id = %id, "admin note added");
        self.refetch(&id).await
    }

    /// PUT /orders/{id}/verify-payment, then re-fetch order and proof.
    pub async fn verify_payment(
        &self,
        decision: VerificationDecision,
        admin_notes: Option<&str>,
    ) -> ClientResult<Order> {
        let (id, _) = self.loaded()?;
        order::check_verification(self.state().proof.as_ref())?;
        let admin_notes = validation::optional_text(admin_notes, "admin notes", MAX_NOTE_LEN)?;
        let _guard = self.begin_update()?;

        let request = VerifyPaymentRequest {
            status: decision,
            admin_notes,
        };
        self.api.orders().verify_payment(&id, &request).await?;
        info!(order_id = %id, decision = %decision, "payment proof reviewed");

        let order = self.refetch(&id).await?;
        let proof = self.api.orders().payment_proof(&id).await?;
        self.state().proof = proof;
        Ok(order)
    }

    // ── Internals ───────────────────────────────────────────────────

    fn loaded_id(&self) -> ClientResult<String> {
        self.state()
            .order
            .as_ref()
            .map(|o| o.id.clone())
            .ok_or(ClientError::Workflow(WorkflowError::NoOrderLoaded))
    }

    fn loaded(&self) -> ClientResult<(String, OrderStatus)> {
        self.state()
            .order
            .as_ref()
            .map(|o| (o.id.clone(), o.status))
            .ok_or(ClientError::Workflow(WorkflowError::NoOrderLoaded))
    }

    fn begin_update(&self) -> ClientResult<UpdateGuard<'_>> {
        self.updating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ClientError::Busy)?;
        Ok(UpdateGuard(&self.updating))
    }

    async fn refetch(&self, id: &str) -> ClientResult<Order> {
        let order = self.api.orders().get(id).await?;
        let mut state = self.state();
        state.selected_status = Some(order.status);
        state.order = Some(order.clone());
        Ok(order)
    }
}
