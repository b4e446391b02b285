/*!
A minimal line-oriented reader for the corpus grammar of §6, kept
intentionally dumb: it tokenizes a line into a fact, a form declaration or a
primary declaration and hands the result to a [Builder]; it performs no
semantic validation beyond recognizing the grammar (that is the builder's
and kernel's job). See §4.7.
*/

use std::io::BufRead;

use crate::builder::Builder;
use crate::lattice::{form::Form, reducibility::Reducibility};
use crate::structures::operator::Operator;
use crate::types::err::ErrorKind;

/// One parsed, not-yet-applied line of the corpus grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineItem {
    Relation {
        a: String,
        op: Operator,
        b: String,
        reversed: bool,
        justification: String,
    },
    Form {
        name: String,
        form: Form,
    },
    Primary {
        name: String,
    },
}

/// Reads every line from `reader` and applies it to `builder` in order.
/// Blank lines and `#`-comments are skipped. Physical lines are joined until
/// every `"""` delimiter they open is closed, so a `"""..."""` justification
/// may span several lines of the source (§6). The reader never owns `reader`.
pub fn ingest<R: BufRead>(builder: &mut Builder, reader: R) -> Result<(), ErrorKind> {
    let mut pending: Option<(String, usize)> = None;

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|e| malformed(line_no, e.to_string()))?;

        let (logical_line, start_no) = match pending.take() {
            Some((mut buf, start_no)) => {
                buf.push('\n');
                buf.push_str(&line);
                (buf, start_no)
            }
            None => (line, line_no),
        };

        if logical_line.matches("\"\"\"").count() % 2 == 1 {
            pending = Some((logical_line, start_no));
            continue;
        }

        if let Some(item) = parse_line(&logical_line, start_no)? {
            apply(builder, item)?;
        }
    }

    if let Some((_, start_no)) = pending {
        return Err(malformed(start_no, "unterminated triple-quoted justification"));
    }

    Ok(())
}

fn apply(builder: &mut Builder, item: LineItem) -> Result<(), ErrorKind> {
    match item {
        LineItem::Relation { a, op, b, reversed, justification } => {
            let (id_a, id_b) = builder.standardize(&a, reversed, &b);
            match op {
                Operator::Implies(r) => {
                    builder.assert_implies(&id_a, r, &id_b, justification)?;
                }
                Operator::NotImplies(r) => {
                    builder.assert_not_implies(&id_a, r, &id_b, justification)?;
                }
                Operator::Equiv(r) => {
                    builder.assert_equiv(&id_a, r, &id_b, justification)?;
                }
                Operator::Conservative(f) => {
                    builder.assert_conservative(&id_a, f, &id_b, justification)?;
                }
                Operator::NonConservative(f) => {
                    builder.assert_non_conservative(&id_a, f, &id_b, justification)?;
                }
            }
        }
        LineItem::Form { name, form } => {
            let id = builder.add_principle(&name);
            builder.assert_form(&id, form, String::new())?;
        }
        LineItem::Primary { name } => {
            let id = builder.add_principle(&name);
            builder.assert_primary(&id);
        }
    }
    Ok(())
}

/// Parses a single line, stripped of its trailing comment. Returns `Ok(None)` for a blank or
/// comment-only line.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<LineItem>, ErrorKind> {
    let code = line.split('#').next().unwrap_or("").trim();
    if code.is_empty() {
        return Ok(None);
    }

    let (name_a, rest) = next_token(code).ok_or_else(|| malformed(line_no, "expected a principle name"))?;
    let (tok2, rest) = next_token(rest).ok_or_else(|| malformed(line_no, "expected an operator"))?;

    if tok2 == "form" {
        let (form_name, _) = next_token(rest).ok_or_else(|| malformed(line_no, "expected a form name"))?;
        let form = Form::from_str(form_name)
            .ok_or_else(|| malformed(line_no, format!("unknown form {form_name:?}")))?;
        return Ok(Some(LineItem::Form { name: name_a.to_string(), form }));
    }

    if tok2 == "is" {
        let (tok3, _) = next_token(rest).ok_or_else(|| malformed(line_no, "expected 'primary'"))?;
        if tok3 != "primary" {
            return Err(malformed(line_no, format!("expected 'primary', found {tok3:?}")));
        }
        return Ok(Some(LineItem::Primary { name: name_a.to_string() }));
    }

    let (op, reversed) =
        parse_operator(tok2).ok_or_else(|| malformed(line_no, format!("unrecognized operator {tok2:?}")))?;
    let (name_b, rest) = next_token(rest).ok_or_else(|| malformed(line_no, "expected a second principle name"))?;
    let justification = parse_justification(rest, line_no)?;

    Ok(Some(LineItem::Relation {
        a: name_a.to_string(),
        op,
        b: name_b.to_string(),
        reversed,
        justification,
    }))
}

fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(i) => Some((&s[..i], &s[i..])),
        None => Some((s, "")),
    }
}

/// Parses a single operator token: prefix-style (`sW->`), suffix-style (`=>_sW`), or a
/// conservation token (`Pi03c`, `nPi03c`). Returns the operator and whether the operands
/// should be swapped (the `<=`/`</=` aliases, per §4.2's `standardize`).
fn parse_operator(tok: &str) -> Option<(Operator, bool)> {
    if let Some(r) = tok.strip_suffix("->") {
        return Some((Operator::Implies(Reducibility::from_str(r)?), false));
    }
    if let Some(r) = tok.strip_suffix("-|>") {
        return Some((Operator::NotImplies(Reducibility::from_str(r)?), false));
    }
    if let Some(r) = tok.strip_suffix("<->") {
        return Some((Operator::Equiv(Reducibility::from_str(r)?), false));
    }
    if let Some(r) = tok.strip_prefix("=>_") {
        return Some((Operator::Implies(Reducibility::from_str(r)?), false));
    }
    if let Some(r) = tok.strip_prefix("=/>_") {
        return Some((Operator::NotImplies(Reducibility::from_str(r)?), false));
    }
    if let Some(r) = tok.strip_prefix("<=>_") {
        return Some((Operator::Equiv(Reducibility::from_str(r)?), false));
    }
    if let Some(r) = tok.strip_prefix("<=_") {
        return Some((Operator::Implies(Reducibility::from_str(r)?), true));
    }
    if let Some(r) = tok.strip_prefix("</=_") {
        return Some((Operator::NotImplies(Reducibility::from_str(r)?), true));
    }
    if let Some(rest) = tok.strip_prefix('n') {
        if let Some(fname) = rest.strip_suffix('c') {
            return Some((Operator::NonConservative(Form::from_str(fname)?), false));
        }
    }
    if let Some(fname) = tok.strip_suffix('c') {
        return Some((Operator::Conservative(Form::from_str(fname)?), false));
    }
    None
}

fn parse_justification(rest: &str, line_no: usize) -> Result<String, ErrorKind> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Ok(String::new());
    }
    if let Some(inner) = rest.strip_prefix("\"\"\"") {
        let end = inner
            .find("\"\"\"")
            .ok_or_else(|| malformed(line_no, "unterminated triple-quoted justification"))?;
        return Ok(inner[..end].to_string());
    }
    if let Some(inner) = rest.strip_prefix('"') {
        let end = inner
            .find('"')
            .ok_or_else(|| malformed(line_no, "unterminated justification"))?;
        return Ok(inner[..end].to_string());
    }
    Err(malformed(line_no, format!("unexpected trailing text: {rest:?}")))
}

fn malformed(line: usize, reason: impl Into<String>) -> ErrorKind {
    ErrorKind::MalformedInput { line, reason: reason.into() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefix_style_relation() {
        let item = parse_line(r#"A sW-> B "lemma1""#, 1).unwrap().unwrap();
        assert_eq!(
            item,
            LineItem::Relation {
                a: "A".into(),
                op: Operator::Implies(Reducibility::StrongWeihrauch),
                b: "B".into(),
                reversed: false,
                justification: "lemma1".into(),
            }
        );
    }

    #[test]
    fn parses_suffix_style_reversed_relation() {
        let item = parse_line(r#"A <=_W B "lemma2""#, 1).unwrap().unwrap();
        assert_eq!(
            item,
            LineItem::Relation {
                a: "A".into(),
                op: Operator::Implies(Reducibility::Weihrauch),
                b: "B".into(),
                reversed: true,
                justification: "lemma2".into(),
            }
        );
    }

    #[test]
    fn empty_reducibility_defaults_to_rca() {
        let item = parse_line(r#"A -> B """#, 1).unwrap().unwrap();
        assert_eq!(
            item,
            LineItem::Relation {
                a: "A".into(),
                op: Operator::Implies(Reducibility::Rca),
                b: "B".into(),
                reversed: false,
                justification: "".into(),
            }
        );
    }

    #[test]
    fn parses_conservation_tokens() {
        let item = parse_line(r#"A Pi03c B "x""#, 1).unwrap().unwrap();
        assert_eq!(
            item,
            LineItem::Relation {
                a: "A".into(),
                op: Operator::Conservative(Form::Pi03),
                b: "B".into(),
                reversed: false,
                justification: "x".into(),
            }
        );

        let item = parse_line(r#"A nPi03c B "x""#, 1).unwrap().unwrap();
        assert_eq!(
            item,
            LineItem::Relation {
                a: "A".into(),
                op: Operator::NonConservative(Form::Pi03),
                b: "B".into(),
                reversed: false,
                justification: "x".into(),
            }
        );
    }

    #[test]
    fn parses_form_and_primary_declarations() {
        assert_eq!(
            parse_line("A form Pi03", 1).unwrap().unwrap(),
            LineItem::Form { name: "A".into(), form: Form::Pi03 }
        );
        assert_eq!(
            parse_line("A is primary", 1).unwrap().unwrap(),
            LineItem::Primary { name: "A".into() }
        );
    }

    #[test]
    fn parses_triple_quoted_justification() {
        let line = "A -> B \"\"\"multi\nline\"\"\"";
        let item = parse_line(line, 1).unwrap().unwrap();
        match item {
            LineItem::Relation { justification, .. } => assert_eq!(justification, "multi\nline"),
            _ => panic!("expected a relation"),
        }
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        assert!(parse_line("# just a comment", 1).unwrap().is_none());
        assert!(parse_line("   ", 1).unwrap().is_none());
    }

    #[test]
    fn unrecognized_operator_is_malformed() {
        let err = parse_line("A ?? B", 1).unwrap_err();
        assert!(matches!(err, ErrorKind::MalformedInput { line: 1, .. }));
    }

    #[test]
    fn ingest_applies_lines_to_a_builder() {
        use crate::db::Database;

        let mut db = Database::new();
        let mut builder = Builder::new(&mut db);
        let source = "A -> B \"axiom\"\nB is primary\n";
        ingest(&mut builder, source.as_bytes()).unwrap();

        assert!(db.registry.get("A").is_some());
        assert!(db.primary.is_primary(db.registry.get("B").unwrap()));
    }

    #[test]
    fn ingest_joins_a_justification_spanning_physical_lines() {
        use crate::db::Database;

        let mut db = Database::new();
        let mut builder = Builder::new(&mut db);
        let source = "A -> B \"\"\"first\nsecond\"\"\"\n";
        ingest(&mut builder, source.as_bytes()).unwrap();

        let a = db.registry.get("A").unwrap();
        let b = db.registry.get("B").unwrap();
        let fact = crate::structures::fact::Fact::relation(
            a,
            Operator::Implies(Reducibility::Rca),
            b,
        );
        let id = db.justifications.id_of(&fact).unwrap();
        match db.justifications.justification(id) {
            crate::structures::justification::Justification::Leaf(text) => {
                assert_eq!(text, "first\nsecond");
            }
            _ => panic!("expected a leaf justification"),
        }
    }
}
