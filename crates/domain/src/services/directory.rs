//! In-memory tenant directory filtering.

use crate::models::tenant::{Industry, SubscriptionStatus, SubscriptionTier, Tenant};

/// Query parameters for listing tenants. All axes are conjunctive; absent
/// axes match everything.
#[derive(Debug, Clone, Default)]
pub struct TenantQuery {
    /// Case-insensitive substring match against name or slug.
    pub search: Option<String>,
    pub industry: Option<Industry>,
    pub status: Option<SubscriptionStatus>,
    pub tier: Option<SubscriptionTier>,
}

/// Filters a tenant slice against the query, preserving order.
pub fn filter_tenants<'a>(tenants: &'a [Tenant], query: &TenantQuery) -> Vec<&'a Tenant> {
    tenants.iter().filter(|tenant| matches(tenant, query)).collect()
}

fn matches(tenant: &Tenant, query: &TenantQuery) -> bool {
    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        if !needle.is_empty()
            && !tenant.name.to_lowercase().contains(&needle)
            && !tenant.slug.to_lowercase().contains(&needle)
        {
            return false;
        }
    }
    if let Some(industry) = query.industry {
        if tenant.industry != industry {
            return false;
        }
    }
    if let Some(status) = query.status {
        if tenant.subscription_status != status {
            return false;
        }
    }
    if let Some(tier) = query.tier {
        if tenant.subscription_tier != tier {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_tenants;

    #[test]
    fn test_empty_query_matches_everything() {
        let tenants = sample_tenants();
        let all = filter_tenants(&tenants, &TenantQuery::default());
        assert_eq!(all.len(), tenants.len());
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let tenants = sample_tenants();
        let query = TenantQuery {
            search: Some("MERIDIAN".to_string()),
            ..TenantQuery::default()
        };
        let found = filter_tenants(&tenants, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].slug, "meridian-health-group");
    }

    #[test]
    fn test_search_matches_slug() {
        let tenants = sample_tenants();
        let query = TenantQuery {
            search: Some("technova".to_string()),
            ..TenantQuery::default()
        };
        assert_eq!(filter_tenants(&tenants, &query).len(), 1);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let tenants = sample_tenants();
        let query = TenantQuery {
            industry: Some(Industry::Consulting),
            status: Some(SubscriptionStatus::Active),
            ..TenantQuery::default()
        };
        for tenant in filter_tenants(&tenants, &query) {
            assert_eq!(tenant.industry, Industry::Consulting);
            assert_eq!(tenant.subscription_status, SubscriptionStatus::Active);
        }

        let impossible = TenantQuery {
            search: Some("meridian".to_string()),
            industry: Some(Industry::Consulting),
            ..TenantQuery::default()
        };
        assert!(filter_tenants(&tenants, &impossible).is_empty());
    }

    #[test]
    fn test_no_match_returns_empty() {
        let tenants = sample_tenants();
        let query = TenantQuery {
            search: Some("nonexistent-client".to_string()),
            ..TenantQuery::default()
        };
        assert!(filter_tenants(&tenants, &query).is_empty());
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let tenants = sample_tenants();
        let query = TenantQuery {
            search: Some(String::new()),
            ..TenantQuery::default()
        };
        assert_eq!(filter_tenants(&tenants, &query).len(), tenants.len());
    }
}
