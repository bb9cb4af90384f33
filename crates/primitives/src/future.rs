use std::future::Future;
use std::pin::Pin;

/// A pinned, boxed future that is not required to be Send.
///
/// Command handlers and host callbacks return this so that dispatch can
/// recurse (repeat, macro playback) through trait objects.
pub type BoxFutureLocal<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;
