use crate::domain::model::{ContactMessage, SubmitFailure};
use async_trait::async_trait;
use std::collections::HashMap;

/// The remote contact endpoint (hosted spreadsheet/database webhook).
#[async_trait]
pub trait ContactEndpoint: Send + Sync {
    /// Reachability check. `Ok(())` means the endpoint answered with a success status.
    async fn probe(&self) -> std::result::Result<(), SubmitFailure>;

    async fn submit(&self, message: &ContactMessage) -> std::result::Result<(), SubmitFailure>;
}

/// Fire-and-forget user notifications (toasts).
pub trait Notifier: Send + Sync {
    fn notify_success(&self, text: &str);
    fn notify_error(&self, text: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn headers(&self) -> &HashMap<String, String>;
}

#[async_trait]
impl<T: ContactEndpoint + ?Sized> ContactEndpoint for std::sync::Arc<T> {
    async fn probe(&self) -> std::result::Result<(), SubmitFailure> {
        (**self).probe().await
    }

    async fn submit(&self, message: &ContactMessage) -> std::result::Result<(), SubmitFailure> {
        (**self).submit(message).await
    }
}

impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    fn notify_success(&self, text: &str) {
        (**self).notify_success(text)
    }

    fn notify_error(&self, text: &str) {
        (**self).notify_error(text)
    }
}
