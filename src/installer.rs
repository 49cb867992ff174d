use crate::{
    error::InstallerError,
    state::{Progress, ProgressStore},
    steps::{Env, Step},
    ui,
};

/// Drives the fixed step sequence and owns the progress record.
pub struct Installer {
    steps: Vec<Step>,
    store: ProgressStore,
    progress: Progress,
}

impl Installer {
    /// Loads previous progress from `store`.
    pub fn new(store: ProgressStore, steps: Vec<Step>) -> Self {
        tracing::debug!("progress file: {}", store.path().display());
        let progress = store.load();
        Self {
            steps,
            store,
            progress,
        }
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Runs every step in order.
    ///
    /// Skipped steps are announced and passed over. The first failing
    /// step aborts the run; its error is wrapped with the step name.
    /// After each successful step the record is updated and saved.
    pub fn run(&mut self, env: Env<'_>) -> Result<(), InstallerError> {
        let total = self.steps.len();

        for (i, step) in self.steps.iter().enumerate() {
            let n = i + 1;

            if step.should_skip(&self.progress, env.config) {
                tracing::info!("[{n}/{total}] {} - SKIPPED: {}", step.name(), step.skip_reason());
                ui::print_skipped(n, total, step.name(), step.skip_reason());
                continue;
            }

            tracing::info!("[{n}/{total}] {}...", step.name());
            ui::print_step(n, total, step.name());

            if let Err(e) = step.execute(env) {
                tracing::error!("[{n}/{total}] {} failed: {e}", step.name());
                return Err(e.in_step(step.name()));
            }

            step.mark_done(&mut self.progress);
            self.store.save(&mut self.progress, env.clock);
            tracing::info!("[{n}/{total}] {} - done", step.name());
        }

        Ok(())
    }
}
