//! Capability selectors and response languages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A selectable capability of the platform.
///
/// Six modules generate content through the remote model. `About` is a
/// static information view and never reaches the prompt builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Module {
    /// Static platform description (non-analytical)
    About,
    /// Static code analysis producing a scored finding list
    AuditEngine,
    /// Free-form hardening and architecture advice
    AdvisoryChat,
    /// Secure component / function generation
    SecureForge,
    /// Financial and operational impact estimation for an attack scenario
    CrisisSimulator,
    /// Compliance documentation (ISO 27001, GDPR, PCI-DSS)
    ComplianceShield,
    /// Exposed-credential and public vulnerability intelligence
    LeakHunter,
}

impl Module {
    /// Every module, in menu order.
    pub const ALL: [Self; 7] = [
        Self::About,
        Self::AuditEngine,
        Self::AdvisoryChat,
        Self::SecureForge,
        Self::CrisisSimulator,
        Self::ComplianceShield,
        Self::LeakHunter,
    ];

    /// Modules that produce content through the remote model.
    pub const ANALYTICAL: [Self; 6] = [
        Self::AuditEngine,
        Self::AdvisoryChat,
        Self::SecureForge,
        Self::CrisisSimulator,
        Self::ComplianceShield,
        Self::LeakHunter,
    ];

    /// Stable kebab-case identifier used on the command line and in config.
    pub const fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::AuditEngine => "audit-engine",
            Self::AdvisoryChat => "advisory-chat",
            Self::SecureForge => "secure-forge",
            Self::CrisisSimulator => "crisis-simulator",
            Self::ComplianceShield => "compliance-shield",
            Self::LeakHunter => "leak-hunter",
        }
    }

    /// Human-facing title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::About => "ABOUT PLATFORM",
            Self::AuditEngine => "AUDIT ENGINE",
            Self::AdvisoryChat => "ADVISORY CHAT",
            Self::SecureForge => "SECURE FORGE",
            Self::CrisisSimulator => "CRISIS SIMULATOR",
            Self::ComplianceShield => "COMPLIANCE SHIELD",
            Self::LeakHunter => "LEAK HUNTER",
        }
    }

    /// Whether the module is routed to the remote model at all.
    pub const fn is_analytical(self) -> bool {
        !matches!(self, Self::About)
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Module {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|m| m.id() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|m| m.id()).collect();
                format!("unknown module '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

/// Target language for generated prose.
///
/// Only instructs the remote model; never changes control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish
    #[default]
    Es,
    /// English
    En,
}

impl Language {
    /// ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Native display name, used inside the language directive.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Es => "Español",
            Self::En => "English",
        }
    }

    /// Lenient parse: unknown codes resolve to the default language.
    pub fn from_code_lossy(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" | "spanish" | "español" => Ok(Self::Es),
            "en" | "english" => Ok(Self::En),
            other => Err(format!("unsupported language '{other}' (expected es or en)")),
        }
    }
}
