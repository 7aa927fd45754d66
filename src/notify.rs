use std::sync::mpsc::{self, Receiver, Sender};

/// Fan-out of state changes to any number of channel subscribers.
#[derive(Debug)]
pub struct Notifier<E: Clone>
{
    subscribers: Vec<Sender<E>>,
}

impl<E: Clone> Default for Notifier<E>
{
    fn default() -> Self
    {
        Self {
            subscribers: Vec::new(),
        }
    }
}

impl<E: Clone> Notifier<E>
{
    /// New receivers start with `snapshot` queued so they see current state.
    pub fn subscribe(&mut self, snapshot: impl IntoIterator<Item = E>) -> Receiver<E>
    {
        let (tx, rx) = mpsc::channel();
        for event in snapshot {
            // rx is alive in this scope
            let _ = tx.send(event);
        }
        self.subscribers.push(tx);
        rx
    }

    pub fn publish(&mut self, event: E)
    {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize
    {
        self.subscribers.len()
    }
}
