//! A tiny actor runtime: one mailbox, one event loop, exclusive state.
//!
//! Every mutation of an actor's state happens inside a message handler on
//! its event loop, which makes the actor the single logical thread of
//! control for that state. Delayed work is expressed as messages the actor
//! schedules for itself with [`Actor::send_after`].

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod error;
mod handle;
mod mailbox;
mod scheduler;

pub use error::ActorDeadError;
pub use handle::Actor;
pub use mailbox::Message;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::oneshot;

    use super::*;

    #[derive(Default)]
    struct Log {
        entries: Vec<&'static str>,
    }

    #[derive(Debug)]
    struct Push(&'static str);

    impl Message<Log> for Push {
        fn handle(self, state: &mut Log, _handle: &Actor<Log>) {
            state.entries.push(self.0);
        }
    }

    #[derive(Debug)]
    struct PushLater(&'static str, Duration);

    impl Message<Log> for PushLater {
        fn handle(self, _state: &mut Log, handle: &Actor<Log>) {
            handle.send_after(Push(self.0), self.1);
        }
    }

    #[derive(Debug)]
    struct Read(oneshot::Sender<Vec<&'static str>>);

    impl Message<Log> for Read {
        fn handle(self, state: &mut Log, _handle: &Actor<Log>) {
            self.0.send(state.entries.clone()).ok();
        }
    }

    async fn read(actor: &Actor<Log>) -> Vec<&'static str> {
        let (tx, rx) = oneshot::channel();
        actor.send(Read(tx)).unwrap();
        rx.await.unwrap()
    }

    #[tokio::test]
    async fn test_messages_are_handled_in_order() {
        let actor = Actor::spawn(Log::default(), None);
        actor.send(Push("a")).unwrap();
        actor.send(Push("b")).unwrap();
        actor.send(Push("c")).unwrap();
        assert_eq!(read(&actor).await, ["a", "b", "c"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delayed_messages_land_after_their_delay() {
        let actor = Actor::spawn(Log::default(), Some("log"));
        actor
            .send(PushLater("slow", Duration::from_millis(1200)))
            .unwrap();
        actor
            .send(PushLater("fast", Duration::from_millis(500)))
            .unwrap();
        actor.send(Push("now")).unwrap();
        assert_eq!(read(&actor).await, ["now"]);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(read(&actor).await, ["now", "fast"]);

        tokio::time::sleep(Duration::from_millis(700)).await;
        assert_eq!(read(&actor).await, ["now", "fast", "slow"]);
    }

    #[tokio::test]
    async fn test_send_after_stop_fails() {
        let actor = Actor::spawn(Log::default(), None);
        actor.stop();
        while !actor.is_stopped() {
            tokio::task::yield_now().await;
        }
        assert!(actor.send(Push("late")).is_err());
    }
}
