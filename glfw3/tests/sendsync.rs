use glfw3::*;

/// Implemented for everything, and a second time for `Send` types, which makes
/// the call ambiguous and fails to compile if the type is `Send`.
trait AmbiguousIfSend<A> {
    fn some_item() {}
}

impl<T: ?Sized> AmbiguousIfSend<()> for T {}

#[allow(dead_code)]
struct Invalid;

impl<T: ?Sized + Send> AmbiguousIfSend<Invalid> for T {}

trait AmbiguousIfSync<A> {
    fn some_item() {}
}

impl<T: ?Sized> AmbiguousIfSync<()> for T {}

impl<T: ?Sized + Sync> AmbiguousIfSync<Invalid> for T {}

macro_rules! assert_not_send_sync {
    ($($ty:ty),* $(,)?) => {
        $(
            let _ = <$ty as AmbiguousIfSend<_>>::some_item;
            let _ = <$ty as AmbiguousIfSync<_>>::some_item;
        )*
    };
}

trait FailToCompileIfNotSendSync
where
    Self: Send + Sync,
{
}

impl FailToCompileIfNotSendSync for Error {}
impl FailToCompileIfNotSendSync for ErrorKind {}
impl FailToCompileIfNotSendSync for Event {}
impl FailToCompileIfNotSendSync for WindowHint {}
impl FailToCompileIfNotSendSync for InitHint {}
impl FailToCompileIfNotSendSync for VideoMode {}
impl FailToCompileIfNotSendSync for WindowId {}
impl FailToCompileIfNotSendSync for MonitorId {}

#[test]
fn library_objects_stay_on_their_thread() {
    assert_not_send_sync!(Glfw, Window, Monitor);
}
