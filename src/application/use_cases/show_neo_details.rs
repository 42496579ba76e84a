use crate::application::dto::{DetailRequest, DetailResponse};
use crate::ports::outbound::{NeoFeedRepository, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;

/// ShowNeoDetailsUseCase - single-object lookup with best-effort enrichment
///
/// The primary record must load; the orbital data is optional. A missing
/// or failed orbital fetch leaves the record exactly as the lookup
/// returned it and only produces an informational message.
pub struct ShowNeoDetailsUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
}

impl<R, PR> ShowNeoDetailsUseCase<R, PR>
where
    R: NeoFeedRepository,
    PR: ProgressReporter,
{
    pub fn new(repository: R, progress_reporter: PR) -> Self {
        Self {
            repository,
            progress_reporter,
        }
    }

    pub async fn execute(&self, request: DetailRequest) -> Result<DetailResponse> {
        let id = &request.id;

        self.progress_reporter
            .report_loading(&format!("🔭 Looking up NEO {}...", id));

        let mut neo = self
            .repository
            .fetch_neo(id)
            .await
            .with_context(|| format!("Failed to look up NEO {}", id))?;

        let orbital_enriched = match self.repository.fetch_orbital_data(id).await {
            Ok(Some(orbital)) => {
                neo.orbital_data = Some(orbital);
                true
            }
            Ok(None) => {
                self.progress_reporter
                    .report(&format!("ℹ️  No orbital data published for {}", id));
                false
            }
            Err(e) => {
                self.progress_reporter.report(&format!(
                    "ℹ️  Orbital data unavailable for {}: {}",
                    id, e
                ));
                false
            }
        };

        self.progress_reporter
            .report_completion(&format!("✅ Loaded {} ({})", neo.name, neo.id));

        Ok(DetailResponse {
            neo,
            orbital_enriched,
        })
    }
}
