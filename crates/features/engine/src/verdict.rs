use crate::error::EngineError;
use confdrift_domain::binding::ConstValue;
use std::fmt;

/// One disagreement found by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A constant names a key the defaults document does not list.
    MissingDocumentEntry { symbol: String, key: String },
    /// The defaults document lists a key no constant names.
    MissingConstant { key: String },
    /// Two or more filtered constants share a default value. Always fatal.
    DefaultValueCollision { value: ConstValue, symbols: Vec<String> },
}

impl Violation {
    /// Short kind label used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingDocumentEntry { .. } => "missing-document-entry",
            Self::MissingConstant { .. } => "missing-constant",
            Self::DefaultValueCollision { .. } => "default-value-collision",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDocumentEntry { symbol, key } => {
                write!(f, "{key} (constant {symbol}) has no entry in the defaults document")
            },
            Self::MissingConstant { key } => {
                write!(f, "{key} is documented but no constant names it")
            },
            Self::DefaultValueCollision { value, symbols } => {
                write!(f, "default value {value} is shared by {}", symbols.join(", "))
            },
        }
    }
}

/// Counters describing what a run looked at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerdictStats {
    pub bindings: usize,
    pub code_keys: usize,
    pub document_keys: usize,
    pub exempted_code_keys: usize,
    pub exempted_document_keys: usize,
    pub collision_candidates: usize,
}

/// The outcome of a verification run: every violation found plus the strictness that
/// decides which of them fail the run.
#[derive(Debug, Clone)]
pub struct Verdict {
    document: String,
    violations: Vec<Violation>,
    error_if_missing_constants: bool,
    error_if_missing_document_entry: bool,
    stats: VerdictStats,
}

impl Verdict {
    pub(crate) fn new(
        document: impl Into<String>,
        violations: Vec<Violation>,
        error_if_missing_constants: bool,
        error_if_missing_document_entry: bool,
        stats: VerdictStats,
    ) -> Self {
        Self {
            document: document.into(),
            violations,
            error_if_missing_constants,
            error_if_missing_document_entry,
            stats,
        }
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Every violation: missing document entries, then missing constants, then collisions,
    /// each group sorted by key or value.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub const fn stats(&self) -> VerdictStats {
        self.stats
    }

    #[must_use]
    pub const fn is_fatal(&self, violation: &Violation) -> bool {
        match violation {
            Violation::MissingDocumentEntry { .. } => self.error_if_missing_document_entry,
            Violation::MissingConstant { .. } => self.error_if_missing_constants,
            Violation::DefaultValueCollision { .. } => true,
        }
    }

    pub fn fatal(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|violation| self.is_fatal(violation))
    }

    pub fn non_fatal(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|violation| !self.is_fatal(violation))
    }

    /// `false` iff at least one fatal violation was found.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.fatal().next().is_none()
    }

    /// Keys declared in code but absent from the document, whether fatal or not.
    pub fn missing_document_entries(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().filter_map(|violation| match violation {
            Violation::MissingDocumentEntry { key, .. } => Some(key.as_str()),
            _ => None,
        })
    }

    /// Keys documented but never named by a constant, whether fatal or not.
    pub fn missing_constants(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().filter_map(|violation| match violation {
            Violation::MissingConstant { key } => Some(key.as_str()),
            _ => None,
        })
    }

    pub fn collisions(&self) -> impl Iterator<Item = (&ConstValue, &[String])> {
        self.violations.iter().filter_map(|violation| match violation {
            Violation::DefaultValueCollision { value, symbols } => {
                Some((value, symbols.as_slice()))
            },
            _ => None,
        })
    }

    /// Turns a failing verdict into [`EngineError::Drift`].
    ///
    /// # Errors
    /// Returns [`EngineError::Drift`] listing every fatal violation.
    pub fn ensure(&self) -> Result<(), EngineError> {
        if self.is_pass() {
            return Ok(());
        }
        Err(EngineError::Drift {
            message: self.report().into(),
            context: Some(self.document.clone().into()),
        })
    }

    /// Panics with the full report when the verdict fails.
    ///
    /// # Panics
    /// When at least one fatal violation was found.
    #[track_caller]
    pub fn assert_pass(&self) {
        assert!(self.is_pass(), "configuration drift in {}:\n{}", self.document, self.report());
    }

    /// Human-readable list of the fatal violations, one per line.
    #[must_use]
    pub fn report(&self) -> String {
        let mut report = String::new();
        for (heading, kind) in [
            ("Constants missing from the defaults document", "missing-document-entry"),
            ("Document entries without a constant", "missing-constant"),
            ("Default value collisions", "default-value-collision"),
        ] {
            let lines: Vec<String> = self
                .fatal()
                .filter(|violation| violation.kind() == kind)
                .map(|violation| format!("  - {violation}"))
                .collect();
            if lines.is_empty() {
                continue;
            }
            report.push_str(&format!("{heading} ({}):\n", lines.len()));
            for line in lines {
                report.push_str(&line);
                report.push('\n');
            }
        }
        report
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fatal = self.fatal().count();
        write!(
            f,
            "{}: {} violation(s), {fatal} fatal ({} bindings, {} document keys)",
            self.document,
            self.violations.len(),
            self.stats.bindings,
            self.stats.document_keys
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(constants_fatal: bool, entries_fatal: bool) -> Verdict {
        Verdict::new(
            "demo-default.xml",
            vec![
                Violation::MissingDocumentEntry { symbol: "C_KEY".into(), key: "c".into() },
                Violation::MissingConstant { key: "z".into() },
            ],
            constants_fatal,
            entries_fatal,
            VerdictStats::default(),
        )
    }

    #[test]
    fn strictness_decides_fatality() {
        assert!(verdict(false, false).is_pass());
        assert!(!verdict(true, false).is_pass());
        assert!(!verdict(false, true).is_pass());

        let lenient = verdict(true, false);
        assert_eq!(lenient.non_fatal().count(), 1);
        assert!(lenient.report().contains("z is documented"));
        assert!(!lenient.report().contains("C_KEY"));
    }

    #[test]
    fn collisions_are_always_fatal() {
        let verdict = Verdict::new(
            "demo-default.xml",
            vec![Violation::DefaultValueCollision {
                value: ConstValue::Integer(8000),
                symbols: vec!["SERVICE_BAR_PORT".into(), "SERVICE_FOO_PORT".into()],
            }],
            false,
            false,
            VerdictStats::default(),
        );
        assert!(!verdict.is_pass());
        let err = verdict.ensure().unwrap_err();
        assert!(err.to_string().contains("SERVICE_BAR_PORT, SERVICE_FOO_PORT"));
    }

    #[test]
    #[should_panic(expected = "configuration drift in demo-default.xml")]
    fn assert_pass_panics_on_failure() {
        verdict(true, true).assert_pass();
    }
}
