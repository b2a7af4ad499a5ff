use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Variant
// ---------------------------------------------------------------------------

/// One of the fixed editions of the front-end. The set is closed: every
/// stage (detector, builder, deployer) consumes this same table, so a tag
/// unknown here is out of contract everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Base,
    Owner,
    Tenant,
    Admin,
}

impl Variant {
    /// Variants with a distinct build step, in batch-build order.
    pub fn buildable() -> &'static [Variant] {
        &[Variant::Owner, Variant::Tenant, Variant::Admin]
    }

    /// Variants the deployer publishes, in deploy order. Superset of
    /// `buildable()`: base deploys the unqualified build output.
    pub fn deployable() -> &'static [Variant] {
        &[Variant::Base, Variant::Owner, Variant::Tenant, Variant::Admin]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Base => "base",
            Variant::Owner => "owner",
            Variant::Tenant => "tenant",
            Variant::Admin => "admin",
        }
    }

    /// Name of the output directory this variant deploys from.
    /// Base keeps the build tool's conventional directory name.
    pub fn output_dir(self, dist_dir: &str) -> String {
        match self {
            Variant::Base => dist_dir.to_string(),
            v => format!("{dist_dir}-{}", v.as_str()),
        }
    }

    /// Name of the per-variant deployment config file.
    pub fn deploy_config(self) -> String {
        match self {
            Variant::Base => "vercel.json".to_string(),
            v => format!("vercel-{}.json", v.as_str()),
        }
    }

    /// The package.json script the external build tool runs for this variant.
    pub fn build_script(self) -> String {
        format!("build:{}", self.as_str())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Variant {
    type Err = crate::error::PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(Variant::Base),
            "owner" => Ok(Variant::Owner),
            "tenant" => Ok(Variant::Tenant),
            "admin" => Ok(Variant::Admin),
            _ => Err(crate::error::PortalError::UnknownVariant(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployable_is_superset_of_buildable() {
        for v in Variant::buildable() {
            assert!(Variant::deployable().contains(v));
        }
        assert!(Variant::deployable().contains(&Variant::Base));
        assert!(!Variant::buildable().contains(&Variant::Base));
    }

    #[test]
    fn build_order_is_owner_tenant_admin() {
        assert_eq!(
            Variant::buildable(),
            &[Variant::Owner, Variant::Tenant, Variant::Admin]
        );
    }

    #[test]
    fn deploy_order_starts_with_base() {
        assert_eq!(Variant::deployable()[0], Variant::Base);
    }

    #[test]
    fn output_dir_conventions() {
        assert_eq!(Variant::Base.output_dir("dist"), "dist");
        assert_eq!(Variant::Owner.output_dir("dist"), "dist-owner");
        assert_eq!(Variant::Admin.output_dir("build"), "build-admin");
    }

    #[test]
    fn deploy_config_conventions() {
        assert_eq!(Variant::Base.deploy_config(), "vercel.json");
        assert_eq!(Variant::Tenant.deploy_config(), "vercel-tenant.json");
    }

    #[test]
    fn from_str_roundtrip() {
        for v in Variant::deployable() {
            let parsed: Variant = v.as_str().parse().unwrap();
            assert_eq!(parsed, *v);
        }
    }

    #[test]
    fn from_str_rejects_unknown_tag() {
        assert!("manager".parse::<Variant>().is_err());
        assert!("".parse::<Variant>().is_err());
        assert!("Owner".parse::<Variant>().is_err());
    }

    #[test]
    fn serde_snake_case() {
        let yaml = serde_yaml::to_string(&Variant::Tenant).unwrap();
        assert!(yaml.contains("tenant"));
        let parsed: Variant = serde_yaml::from_str("admin").unwrap();
        assert_eq!(parsed, Variant::Admin);
    }
}
