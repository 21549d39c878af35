use std::future::Future;
use std::pin::Pin;

type BoxedTask = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Background executor for command futures.
///
/// One dedicated thread running a current-thread Tokio runtime. Command
/// futures are handed over through a channel and spawned onto the runtime;
/// when the owning `StateCtx` is dropped the channel closes and the thread
/// exits with it.
pub(crate) struct TaskPool {
    send: flume::Sender<BoxedTask>,
}

impl TaskPool {
    pub(crate) fn new() -> Self {
        let (send, recv) = flume::unbounded::<BoxedTask>();

        let spawned = std::thread::Builder::new()
            .name("roster-commands".to_owned())
            .spawn(move || {
                let Ok(runtime) = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                else {
                    log::error!("command runtime failed to start; commands will not run");
                    return;
                };

                runtime.block_on(async move {
                    while let Ok(task) = recv.recv_async().await {
                        tokio::spawn(task);
                    }
                });
            });

        if let Err(err) = spawned {
            log::error!("failed to spawn command thread: {err}");
        }

        Self { send }
    }

    pub(crate) fn spawn(&self, task: BoxedTask) {
        if self.send.send(task).is_err() {
            log::warn!("command dropped: task thread is gone");
        }
    }
}

impl std::fmt::Debug for TaskPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskPool").finish_non_exhaustive()
    }
}
