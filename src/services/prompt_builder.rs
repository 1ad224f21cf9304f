//! Prompt and schema policy per module.
//!
//! Everything the model is told besides the user's own text lives here as a
//! compile-time constant. User input is only ever appended to the prompt body; it
//! never reaches the system instruction.

use crate::domain::models::{Language, Module};
use crate::domain::AnalysisError;

/// Persona and formatting contract sent as the system instruction.
pub const SYSTEM_PERSONA: &str = "\
Act as SENTINEL CORE // ADVANCED CYBER-INTELLIGENCE. You are a senior security auditor \
and Zero-Trust architecture expert.

OBJECTIVE:
Analyze code, architectures and configurations to detect security flaws (OWASP Top 10, CWE, recent CVEs).

FORMAT AND STYLE RULES:
1. TONE: Technical, direct, military/corporate. No unnecessary pleasantries.
2. STRUCTURE:
   - Executive Summary.
   - Risk Table (clear format).
   - Detailed Technical Analysis (include a Proof of Concept: how would an attacker exploit this?).
   - Remediation (STEP BY STEP with patched code).
3. ZERO-MARKDOWN IN PROSE: Avoid excessive bold or italics. Use UPPERCASE for headings.
4. CODE: Always use fenced code blocks for patches.

ANALYSIS MODULES:
1. [AUDIT ENGINE]: Static code analysis (SAST). Detects SQLi, XSS, RCE, Path Traversal. Produces a CVSS report.
2. [ADVISORY CHAT]: Consulting on hardening, Zero-Trust and security control implementation.
3. [SECURE FORGE]: Generator of cryptographic functions and secure components (hashing, sanitization, auth middleware).
4. [CRISIS SIMULATOR]: Financial impact calculator. Estimates losses from downtime, regulatory fines (GDPR) and ransomware recovery.
5. [COMPLIANCE SHIELD]: Policy and technical documentation generator for ISO 27001, GDPR, PCI-DSS.
6. [LEAK HUNTER]: Intelligence search for exposed credentials and public 0-day vulnerabilities.

MANDATORY SIGNATURE AT THE END:
SENTINEL CORE // PROTECTING YOUR DIGITAL ASSETS";

/// Fixed per-module behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModulePolicy {
    /// Module this row applies to
    pub module: Module,
    /// Framing placed before the user input
    pub prompt_prefix: &'static str,
    /// Output must match the structured result schema
    pub requires_schema: bool,
    /// Attach web-grounded search
    pub use_retrieval: bool,
}

/// The policy table. `About` has no row.
pub static POLICIES: [ModulePolicy; 6] = [
    ModulePolicy {
        module: Module::AuditEngine,
        prompt_prefix: "[MODULE: AUDIT ENGINE]\nAudit this code for critical vulnerabilities (SQLi, XSS, etc). \
Include PoC and CVSS. Provide detailed step-by-step remediation instructions:\n\n",
        requires_schema: true,
        use_retrieval: false,
    },
    ModulePolicy {
        module: Module::AdvisoryChat,
        prompt_prefix: "[MODULE: ADVISORY CHAT]\nExpert advice required:\n\n",
        requires_schema: false,
        use_retrieval: true,
    },
    ModulePolicy {
        module: Module::SecureForge,
        prompt_prefix: "[MODULE: SECURE FORGE]\nGenerate a secure, hardened function for:\n\n",
        requires_schema: false,
        use_retrieval: false,
    },
    ModulePolicy {
        module: Module::CrisisSimulator,
        prompt_prefix: "[MODULE: CRISIS SIMULATOR]\nCalculate the financial and operational impact of this attack scenario:\n\n",
        requires_schema: false,
        use_retrieval: true,
    },
    ModulePolicy {
        module: Module::ComplianceShield,
        prompt_prefix: "[MODULE: COMPLIANCE SHIELD]\nGenerate compliance documentation (ISO 27001/GDPR) for:\n\n",
        requires_schema: false,
        use_retrieval: true,
    },
    ModulePolicy {
        module: Module::LeakHunter,
        prompt_prefix: "[MODULE: LEAK HUNTER]\nRun an intelligence sweep (OSINT/Dark Web) for:\n\n",
        requires_schema: false,
        use_retrieval: true,
    },
];

impl ModulePolicy {
    /// Look up the row for `module`.
    pub fn lookup(module: Module) -> Option<&'static Self> {
        POLICIES.iter().find(|policy| policy.module == module)
    }
}

/// Everything needed to call the model for one request, minus the user text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPlan {
    /// Module framing, prepended to the user input
    pub prompt_prefix: &'static str,
    /// Persona plus language directive
    pub system_instruction: String,
    /// Output must be a structured result
    pub requires_schema: bool,
    /// Attach web-grounded search
    pub use_retrieval: bool,
}

impl PromptPlan {
    /// Prompt body for the given user input.
    pub fn prompt_for(&self, input: &str) -> String {
        format!("{}{input}", self.prompt_prefix)
    }
}

/// Builds [`PromptPlan`]s from the static policy table.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Plan the request for `module`, answering in `language`.
    ///
    /// Pure; fails only for modules without a policy row.
    pub fn build(module: Module, language: Language) -> Result<PromptPlan, AnalysisError> {
        let policy = ModulePolicy::lookup(module).ok_or(AnalysisError::UnsupportedModule(module))?;

        Ok(PromptPlan {
            prompt_prefix: policy.prompt_prefix,
            system_instruction: format!("{SYSTEM_PERSONA}{}", language_directive(language)),
            requires_schema: policy.requires_schema,
            use_retrieval: policy.use_retrieval,
        })
    }
}

fn language_directive(language: Language) -> String {
    format!(
        "\n\nIMPORTANT: RESPOND IN {}.",
        language.native_name().to_uppercase()
    )
}
