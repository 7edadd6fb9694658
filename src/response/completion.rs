use crate::errors::Error;
use crate::response::{HttpError, Reply};
use futures::channel::oneshot;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Exactly one of these is produced per response.
pub type Outcome<T> = Result<Reply<T>, HttpError>;

pub(crate) type Callback<T> = Box<dyn FnOnce(Outcome<T>) + Send + 'static>;

/// Where a finished response goes.
pub(crate) enum Sink<T> {
    Callback(Callback<T>),
    Channel(oneshot::Sender<Outcome<T>>),
}

impl<T> Sink<T> {
    pub(crate) fn deliver(self, outcome: Outcome<T>) {
        match self {
            Sink::Callback(callback) => callback(outcome),
            Sink::Channel(sender) => {
                if sender.send(outcome).is_err() {
                    debug!("completion dropped before the response was delivered");
                }
            }
        }
    }
}

/// Future side of a channel-backed response builder.
///
/// Resolves once the paired builder completes. If the builder disappears
/// without delivering anything it resolves to a 500. The outcome is handed
/// out once: afterwards `try_outcome` returns `None` and polling panics.
#[must_use = "the outcome is lost unless the completion is awaited"]
pub struct Completion<T> {
    receiver: Option<oneshot::Receiver<Outcome<T>>>,
}

impl<T> Completion<T> {
    pub(crate) fn pair() -> (Sink<T>, Completion<T>) {
        let (sender, receiver) = oneshot::channel();
        let completion = Completion {
            receiver: Some(receiver),
        };

        (Sink::Channel(sender), completion)
    }

    /// Take the outcome without waiting.
    ///
    /// `None` while the builder is live and after the outcome was taken.
    pub fn try_outcome(&mut self) -> Option<Outcome<T>> {
        let receiver = self.receiver.as_mut()?;

        let outcome = match receiver.try_recv() {
            Ok(Some(outcome)) => outcome,
            Ok(None) => return None,
            Err(_) => Err(HttpError::from(Error::ResponseDropped)),
        };

        self.receiver = None;
        Some(outcome)
    }

    /// Whether the outcome was already handed out.
    pub fn is_terminated(&self) -> bool {
        self.receiver.is_none()
    }
}

impl<T> Future for Completion<T> {
    type Output = Outcome<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Outcome<T>> {
        let receiver = match self.receiver.as_mut() {
            Some(receiver) => receiver,
            None => panic!("Completion polled after its outcome was taken"),
        };

        let outcome = match Pin::new(receiver).poll(cx) {
            Poll::Ready(Ok(outcome)) => outcome,
            Poll::Ready(Err(_)) => Err(HttpError::from(Error::ResponseDropped)),
            Poll::Pending => return Poll::Pending,
        };

        self.receiver = None;
        Poll::Ready(outcome)
    }
}
