use futures::Stream;
use leptos::*;

/// Mirrors a store stream into a signal owned by the current view.
///
/// On the server the view renders once, so only `initial` is used. In the
/// browser the forwarding task ends at the first update after the signal is
/// disposed, which also drops the store subscription.
pub fn signal_from_stream<T, S>(initial: T, stream: S) -> ReadSignal<T>
where
    T: Clone + 'static,
    S: Stream<Item = T> + Unpin + 'static,
{
    let (value, set_value) = create_signal(initial);

    #[cfg(not(feature = "ssr"))]
    spawn_local(async move {
        use futures::StreamExt;

        let mut stream = stream;
        while let Some(next) = stream.next().await {
            if set_value.try_set(next).is_some() {
                break;
            }
        }
    });
    #[cfg(feature = "ssr")]
    {
        let _ = (set_value, stream);
    }

    value
}
