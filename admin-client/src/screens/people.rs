use shared::forms::{CustomerForm, ReplyForm};
use shared::models::{Customer, Message, MessageStatus};
use tracing::warn;

use super::{Notice, delete_notice};
use crate::api::AdminApi;
use crate::http::HttpClient;
use crate::list::ListView;
use crate::{ClientError, ClientResult};

// ── Customers ───────────────────────────────────────────────────────

pub struct CustomerScreen<'a, C> {
    api: &'a AdminApi<C>,
    list: ListView<Customer>,
}

impl<'a, C: HttpClient> CustomerScreen<'a, C> {
    pub fn new(api: &'a AdminApi<C>) -> Self {
        Self {
            api,
            list: ListView::default(),
        }
    }

    pub fn list(&self) -> &ListView<Customer> {
        &self.list
    }

    pub fn search(&mut self, text: &str) {
        self.list.set_search(text);
    }

    pub async fn refresh(&mut self) -> ClientResult<usize> {
        let customers = self.api.customers().list().await?;
        self.list.set_items(customers);
        Ok(self.list.len())
    }

    /// The server's copy of the customer replaces the local row.
    pub async fn edit(&mut self, id: &str, form: &CustomerForm) -> ClientResult<Notice> {
        let draft = form.validate()?;
        let customer = self.api.customers().update(id, &draft).await?;
        let message = format!("Customer {} updated", customer.name);
        self.list.replace(customer);
        Ok(Notice::success(message))
    }

    pub async fn delete(&mut self, id: &str) -> ClientResult<Notice> {
        let result = self.api.customers().delete(id).await;
        let outcome = self.list.apply_delete(id, result)?;
        Ok(delete_notice(outcome, "Customer"))
    }
}

// ── Messages ────────────────────────────────────────────────────────

pub struct MessageScreen<'a, C> {
    api: &'a AdminApi<C>,
    list: ListView<Message>,
}

impl<'a, C: HttpClient> MessageScreen<'a, C> {
    pub fn new(api: &'a AdminApi<C>) -> Self {
        Self {
            api,
            list: ListView::default(),
        }
    }

    pub fn list(&self) -> &ListView<Message> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListView<Message> {
        &mut self.list
    }

    pub async fn refresh(&mut self) -> ClientResult<usize> {
        let messages = self.api.messages().list().await?;
        self.list.set_items(messages);
        Ok(self.list.len())
    }

    /// Store the reply and mark the message `replied`.
    pub async fn reply(&mut self, id: &str, form: &ReplyForm) -> ClientResult<Notice> {
        let reply = form.validate()?;
        let mut message = self.existing(id)?;
        message.reply = Some(reply);
        message.status = MessageStatus::Replied;
        self.api.messages().update(&message).await?;
        self.refresh().await?;
        Ok(Notice::success(format!("Reply sent to {}", message.email)))
    }

    /// `resolved` goes back to `new`; anything else becomes `resolved`.
    pub async fn toggle_resolved(&mut self, id: &str) -> ClientResult<Notice> {
        let mut message = self.existing(id)?;
        message.status = match message.status {
            MessageStatus::Resolved => MessageStatus::New,
            _ => MessageStatus::Resolved,
        };
        self.api.messages().update(&message).await?;
        self.refresh().await?;
        Ok(Notice::success(format!("Message marked {}", message.status)))
    }

    pub async fn delete(&mut self, id: &str) -> ClientResult<Notice> {
        let result = self.api.messages().delete(id).await;
        let outcome = self.list.apply_delete(id, result)?;
        // the delete stands even if the follow-up fetch fails
        if let Err(e) = self.refresh().await {
            warn!(error = %e, "refresh after delete failed");
        }
        Ok(delete_notice(outcome, "Message"))
    }

    fn existing(&self, id: &str) -> ClientResult<Message> {
        self.list
            .find(id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("Message {} is not in the list", id)))
    }
}
