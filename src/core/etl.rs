use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub total_rows: usize,
    pub retained_rows: usize,
    pub missing_years: usize,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        tracing::info!("Starting filter run");
        self.monitor.log_stats("Start");

        // Extract
        let table = self.pipeline.extract()?;
        tracing::info!("Extracted {} rows", table.len());
        self.monitor.log_stats("Extract");

        // Transform
        let result = self.pipeline.transform(table)?;
        tracing::info!(
            "Kept {} of {} rows",
            result.retained.len(),
            result.total_rows
        );
        self.monitor.log_stats("Transform");

        let total_rows = result.total_rows;
        let retained_rows = result.retained.len();
        let missing_years = result.missing_years;

        // Load
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(RunSummary {
            output_path,
            total_rows,
            retained_rows,
            missing_years,
        })
    }
}
