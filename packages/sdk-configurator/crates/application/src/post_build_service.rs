use anyhow::{Context, Result};
use domain::{PostBuildRunner, RelocationPlan, TargetPlatform};

/// Runs a relocation plan's post-build steps in order.
pub struct PostBuildService<R: PostBuildRunner> {
    runner: R,
}

impl<R: PostBuildRunner> PostBuildService<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Execute every step; the first failure aborts the rest.
    ///
    /// Returns the number of steps run.
    pub fn run(&self, plan: &RelocationPlan, platform: TargetPlatform) -> Result<usize> {
        let total = plan.steps.len();
        for (index, step) in plan.steps.iter().enumerate() {
            self.runner
                .run_step(index, step, platform)
                .with_context(|| format!("Post-build step {} of {} failed", index + 1, total))?;
        }
        tracing::info!(steps = total, plugin = %plan.plugin_artifact.display(), "Post-build complete");
        Ok(total)
    }
}
