//! Recruitment form validation.
//!
//! Every field has a pure, total predicate over its raw control value. The
//! submit orchestration lives in [`submit`].

mod submit;

pub use submit::{FormSurface, RecruitmentForm, SubmissionState, ValidationOutcome};

/// The seven fields of the tryout form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Age,
    Position,
    Experience,
    Terms,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Age,
        Field::Position,
        Field::Experience,
        Field::Terms,
    ];

    /// Id of the form control holding this field's value.
    pub fn control_id(&self) -> &'static str {
        match self {
            Field::Name => "nome",
            Field::Email => "email",
            Field::Phone => "telefone",
            Field::Age => "idade",
            Field::Position => "posicao",
            Field::Experience => "experiencia",
            Field::Terms => "termos",
        }
    }

    /// Id of the element that displays this field's error.
    pub fn error_id(&self) -> &'static str {
        match self {
            Field::Name => "erro-nome",
            Field::Email => "erro-email",
            Field::Phone => "erro-telefone",
            Field::Age => "erro-idade",
            Field::Position => "erro-posicao",
            Field::Experience => "erro-experiencia",
            Field::Terms => "erro-termos",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Field::Name => "Nome deve ter pelo menos 3 caracteres e não pode conter números",
            Field::Email => "Email inválido. Use o formato: seu.email@exemplo.com",
            Field::Phone => "Telefone deve conter entre 10 e 11 dígitos",
            Field::Age => "Idade deve ser um número entre 1 e 120",
            Field::Position => "Selecione uma posição",
            Field::Experience => "Selecione seu nível de experiência",
            Field::Terms => "Você deve concordar com os termos e condições",
        }
    }

    /// Fields re-checked while the user types.
    pub fn is_live(&self) -> bool {
        matches!(self, Field::Name | Field::Email | Field::Phone | Field::Age)
    }

    pub fn from_control_id(id: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.control_id() == id)
    }
}

/// Whitespace as browsers define it for `\s` and `String.prototype.trim`.
/// Differs from `char::is_whitespace`: includes U+FEFF, excludes U+0085.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

pub(crate) fn trim_form(s: &str) -> &str {
    s.trim_matches(is_form_whitespace)
}

/// Name: at least 3 UTF-16 units after trimming, no digits.
pub fn is_valid_name(name: &str) -> bool {
    let name = trim_form(name);
    name.encode_utf16().count() >= 3 && !name.chars().any(|c| c.is_ascii_digit())
}

/// Email: `local@domain.tld` where no part contains whitespace or `@`.
pub fn is_valid_email(email: &str) -> bool {
    let email = trim_form(email);
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let clean = |s: &str| !s.is_empty() && !s.chars().any(|c| is_form_whitespace(c) || c == '@');
    if !clean(local) || !clean(domain) {
        return false;
    }
    // Needs a dot with at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Phone: 10 or 11 digits once every non-digit is dropped.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    (10..=11).contains(&digits)
}

/// Age: leading integer in `[1, 120]`.
pub fn is_valid_age(age: &str) -> bool {
    parse_leading_int(age).is_some_and(|n| (1..=120).contains(&n))
}

/// Position: any non-blank selection.
pub fn is_valid_position(position: &str) -> bool {
    !trim_form(position).is_empty()
}

/// Experience: any non-blank selection.
pub fn is_valid_experience(experience: &str) -> bool {
    !trim_form(experience).is_empty()
}

pub fn is_valid_terms(accepted: bool) -> bool {
    accepted
}

/// Integer prefix of `s`: leading whitespace, optional sign, then digits.
/// Trailing characters are ignored (`"12 anos"` -> 12); no digits -> `None`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start_matches(is_form_whitespace);
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    // Saturate absurdly long inputs instead of failing; they are out of range anyway.
    let value = rest[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Raw values read from the form controls at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub position: String,
    pub experience: String,
    pub terms: bool,
}

impl FormSnapshot {
    pub fn check(&self, field: Field) -> bool {
        match field {
            Field::Name => is_valid_name(&self.name),
            Field::Email => is_valid_email(&self.email),
            Field::Phone => is_valid_phone(&self.phone),
            Field::Age => is_valid_age(&self.age),
            Field::Position => is_valid_position(&self.position),
            Field::Experience => is_valid_experience(&self.experience),
            Field::Terms => is_valid_terms(self.terms),
        }
    }

    /// Run every predicate; none short-circuits another.
    pub fn validate(&self) -> ValidationReport {
        ValidationReport {
            results: Field::ALL.map(|f| (f, self.check(f))),
        }
    }
}

/// Outcome of one validation pass, one entry per field in [`Field::ALL`] order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    results: [(Field, bool); 7],
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, ok)| *ok)
    }

    pub fn passed(&self, field: Field) -> bool {
        self.results
            .iter()
            .find(|(f, _)| *f == field)
            .is_some_and(|(_, ok)| *ok)
    }

    pub fn failing(&self) -> Vec<Field> {
        self.results
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(f, _)| *f)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, bool)> + '_ {
        self.results.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn valid_snapshot() -> FormSnapshot {
        FormSnapshot {
            name: "Ana Silva".into(),
            email: "ana@clube.com.br".into(),
            phone: "(11) 98888-7777".into(),
            age: "17".into(),
            position: "goleira".into(),
            experience: "amador".into(),
            terms: true,
        }
    }

    #[test]
    fn test_name() {
        assert!(!is_valid_name("Jo3"));
        assert!(!is_valid_name("Jo"));
        assert!(!is_valid_name("  Jo  "));
        assert!(is_valid_name("Ana Silva"));
        assert!(is_valid_name("  Zoé "));
        assert!(!is_valid_name("  Zé "));
        assert!(!is_valid_name("Ana 2"));
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("  a@b.co  "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(is_valid_email("a@b..c"));
    }

    #[test]
    fn test_email_uses_browser_whitespace() {
        assert!(!is_valid_email("a\u{FEFF}b@c.com"));
        assert!(!is_valid_email("a@c\u{3000}d.com"));
        assert!(is_valid_email("a\u{85}b@c.com"));
        assert!(is_valid_email("\u{FEFF}a@b.co\u{FEFF}"));
    }

    #[test]
    fn test_name_length_counts_utf16_units() {
        // One astral character is two units.
        assert!(is_valid_name("\u{1D49C}b"));
        assert!(!is_valid_name("\u{1D49C}"));
        assert!(!is_valid_name("\u{FEFF}Jo\u{FEFF}"));
    }

    #[test]
    fn test_phone() {
        assert!(is_valid_phone("(11) 98888-7777"));
        assert!(is_valid_phone("1133334444"));
        assert!(!is_valid_phone("123456789"));
        assert!(!is_valid_phone("+55 (11) 98888-7777"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_age() {
        for bad in ["0", "121", "abc", "", "-5", "  "] {
            assert!(!is_valid_age(bad), "{bad:?} should fail");
        }
        for good in ["1", "120", " 42", "18 anos", "+7", "3.9"] {
            assert!(is_valid_age(good), "{good:?} should pass");
        }
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_selections_and_terms() {
        assert!(!is_valid_position("   "));
        assert!(is_valid_position("atacante"));
        assert!(!is_valid_experience(""));
        assert!(is_valid_terms(true));
        assert!(!is_valid_terms(false));
    }

    #[test]
    fn test_report_lists_every_failure() {
        let snapshot = FormSnapshot {
            name: "Jo".into(),
            terms: false,
            ..valid_snapshot()
        };
        let report = snapshot.validate();
        assert!(!report.is_valid());
        assert_eq!(report.failing(), vec![Field::Name, Field::Terms]);
        assert!(report.passed(Field::Email));
        assert_eq!(report.iter().count(), 7);
    }

    #[test]
    fn test_field_ids() {
        for field in Field::ALL {
            assert_eq!(field.error_id(), format!("erro-{}", field.control_id()));
            assert_eq!(Field::from_control_id(field.control_id()), Some(field));
        }
        assert_eq!(Field::from_control_id("apelido"), None);
        assert!(Field::Age.is_live());
        assert!(!Field::Terms.is_live());
    }
}
