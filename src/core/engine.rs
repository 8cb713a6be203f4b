use crate::domain::model::RunOutcome;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

pub struct SearchEngine<P: Pipeline> {
    pipeline: P,
    monitor: RunMonitor,
}

impl<P: Pipeline> SearchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    /// 任何錯誤都直接往上傳，由呼叫端統一處理
    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("🚀 Starting nearby places search");
        self.monitor.log_phase("start");

        let area = self.pipeline.extract().await?;
        self.monitor.log_phase("extract");

        if area.candidates.is_empty() {
            tracing::warn!("⚠️ No places found around {}", area.center);
            self.monitor.log_final();
            return Ok(RunOutcome::NothingFound {
                center: area.center,
            });
        }
        tracing::info!("📍 Extracted {} places", area.candidates.len());

        let result = self.pipeline.transform(area).await?;
        self.monitor.log_phase("transform");
        let records = result.records.clone();
        tracing::info!("🔧 Built {} place records", records.len());

        let output_path = self.pipeline.load(result).await?;
        self.monitor.log_phase("load");
        self.monitor.log_final();

        Ok(RunOutcome::Completed {
            output_path,
            records,
        })
    }
}
