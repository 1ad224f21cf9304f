//! Implementation of the `sentinel about` command.
//!
//! The static platform description. This is where the non-analytical
//! `about` module lands; it never reaches the prompt builder.

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, Language, Module};

/// Arguments for `sentinel about`
#[derive(Args, Debug)]
pub struct AboutArgs {
    /// Language: es or en (defaults to the configured language)
    #[arg(short, long)]
    pub lang: Option<Language>,
}

/// Technology note for one module
#[derive(Debug, Serialize)]
pub struct AboutSection {
    /// Module described
    pub module: Module,
    /// Section heading
    pub title: &'static str,
    /// Description
    pub text: &'static str,
}

/// Platform description
#[derive(Debug, Serialize)]
pub struct AboutOutput {
    /// Language of the text
    pub language: Language,
    /// Opening paragraph
    pub intro: &'static str,
    /// One section per analytical module
    pub sections: Vec<AboutSection>,
}

const INTRO_ES: &str = "SENTINEL CORE opera sobre una arquitectura híbrida que combina modelos de \
lenguaje de última generación con bases de conocimiento de vulnerabilidades (CVE/CWE). A \
continuación se detalla la tecnología detrás de cada módulo.";

const INTRO_EN: &str = "SENTINEL CORE operates on a hybrid architecture combining large language \
models with vulnerability knowledge bases (CVE/CWE). Below is the technology behind each module.";

fn section_text(module: Module, language: Language) -> &'static str {
    match (module, language) {
        (Module::AuditEngine, Language::Es) => "TECNOLOGÍA: Análisis estático de código (SAST) potenciado por IA. Reconocimiento de patrones semánticos para rastrear datos contaminados desde la entrada hasta su ejecución.",
        (Module::AuditEngine, Language::En) => "TECH: AI-powered SAST. Semantic pattern recognition that traces tainted data from source to sink.",
        (Module::AdvisoryChat, Language::Es) => "TECNOLOGÍA: Generación aumentada por recuperación conectada a NIST, CIS Benchmarks y OWASP ASVS.",
        (Module::AdvisoryChat, Language::En) => "TECH: Retrieval-augmented generation over NIST, CIS Benchmarks and OWASP ASVS.",
        (Module::SecureForge, Language::Es) => "TECNOLOGÍA: Generación de código seguro por diseño, con validación de entradas y criptografía estándar.",
        (Module::SecureForge, Language::En) => "TECH: Secure-by-design code generation with input validation and standard cryptography.",
        (Module::CrisisSimulator, Language::Es) => "TECNOLOGÍA: Análisis de impacto económico basado en tiempos de inactividad y multas regulatorias vigentes.",
        (Module::CrisisSimulator, Language::En) => "TECH: Economic impact analysis from industry downtime figures and current regulatory fines.",
        (Module::ComplianceShield, Language::Es) => "TECNOLOGÍA: Traducción de texto legal a controles técnicos (ISO 27001, RGPD, PCI-DSS).",
        (Module::ComplianceShield, Language::En) => "TECH: Translation of legal text into technical controls (ISO 27001, GDPR, PCI-DSS).",
        (Module::LeakHunter, Language::Es) => "TECNOLOGÍA: Búsqueda OSINT mediante búsqueda web con fuentes citadas.",
        (Module::LeakHunter, Language::En) => "TECH: OSINT sweep through web-grounded search with cited sources.",
        (Module::About, _) => "",
    }
}

impl AboutOutput {
    /// Description in `language`
    pub fn for_language(language: Language) -> Self {
        let intro = match language {
            Language::Es => INTRO_ES,
            Language::En => INTRO_EN,
        };
        let sections = Module::ANALYTICAL
            .into_iter()
            .map(|module| AboutSection {
                module,
                title: module.title(),
                text: section_text(module, language),
            })
            .collect();

        Self {
            language,
            intro,
            sections,
        }
    }
}

impl CommandOutput for AboutOutput {
    fn to_human(&self) -> String {
        let mut blocks = vec![
            style("SENTINEL CORE").cyan().bold().to_string(),
            self.intro.to_string(),
        ];
        blocks.extend(
            self.sections
                .iter()
                .map(|section| format!("{}\n{}", style(section.title).bold(), section.text)),
        );
        blocks.join("\n\n")
    }
}

/// Print the platform description.
pub fn execute(args: &AboutArgs, config: &Config, json_mode: bool) -> Result<()> {
    let language = args.lang.unwrap_or(config.language);
    output(&AboutOutput::for_language(language), json_mode);
    Ok(())
}
