use crate::dto::HealthRes;

/// Simple health service shared by the REST API and any future surfaces.
///
/// This service provides a standardised way to check the health status of
/// the MRD guide. A healthy process is one whose embedded catalog loaded
/// and validated, so the check touches the catalog on purpose.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Static method to check health without creating an instance.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy and how much of the
    /// catalog is loaded.
    pub fn check_health() -> HealthRes {
        let catalog = mrd_dataset::catalog();
        HealthRes {
            ok: true,
            message: format!(
                "MRD guide is alive ({} subgroups, {} tables)",
                catalog.subgroups.len(),
                catalog.tables.len()
            ),
        }
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_health_reports_catalog_size() {
        let res = HealthService::check_health();
        assert!(res.ok);
        assert!(res.message.contains("11 subgroups"));
        assert!(res.message.contains("6 tables"));
    }
}
