/*!
Proof reconstruction: renders the justification DAG rooted at a [FactId] into
a human-readable tree (§4.6).
*/

use std::collections::HashSet;

use crate::db::{Database, FactId};
use crate::structures::fact::Fact;
use crate::structures::justification::Justification;

/// Renders the proof of `id`: `<fact>: <justification>`, with composite
/// supports indented one level deeper beneath their parent. A fact cited more
/// than once in the same proof is expanded only the first time it is
/// encountered; later occurrences are rendered as a back-reference.
pub fn render(db: &Database, id: FactId) -> String {
    let mut seen = HashSet::new();
    render_node(db, id, 0, &mut seen)
}

/// Renders a single fact by the principle names it relates, not its
/// internal ids (§4.6): `<a> <op> <b>` or `<a> form <f>`.
fn render_fact(db: &Database, fact: &Fact) -> String {
    match fact {
        Fact::Relation { a, op, b } => {
            format!("{} {op} {}", db.registry.name(*a), db.registry.name(*b))
        }
        Fact::HasForm { a, f } => format!("{} form {f}", db.registry.name(*a)),
    }
}

fn render_node(db: &Database, id: FactId, depth: usize, seen: &mut HashSet<FactId>) -> String {
    let fact = db.justifications.fact(id);
    let rendered_fact = render_fact(db, &fact);
    let indent = "  ".repeat(depth);

    if !seen.insert(id) {
        return format!("{indent}{rendered_fact} (see above)");
    }

    match db.justifications.justification(id) {
        Justification::Leaf(text) if text.is_empty() => format!("{indent}{rendered_fact}"),
        Justification::Leaf(text) => format!("{indent}{rendered_fact}: {text}"),
        Justification::Composite(supports) => {
            let mut lines = vec![format!("{indent}{rendered_fact}")];
            for support in supports.clone() {
                lines.push(render_node(db, support, depth + 1, seen));
            }
            lines.join("\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::add_fact;
    use crate::db::{keys::PrincipleId, Database};
    use crate::lattice::reducibility::Reducibility;
    use crate::structures::{fact::Fact, operator::Operator};

    #[test]
    fn leaf_renders_with_justification_text() {
        let mut db = Database::new();
        db.registry.add_principle("A");
        db.registry.add_principle("B");
        let a = PrincipleId(0);
        let b = PrincipleId(1);
        let fact = Fact::relation(a, Operator::Implies(Reducibility::Rca), b);
        add_fact(&mut db, fact, Justification::Leaf("lemma1".into()), 1).unwrap();
        let id = db.justifications.id_of(&fact).unwrap();

        let rendered = render(&db, id);
        assert!(rendered.contains("lemma1"));
    }

    #[test]
    fn repeated_support_is_not_fully_reexpanded() {
        let mut db = Database::new();
        db.registry.add_principle("A");
        db.registry.add_principle("B");
        let a = PrincipleId(0);
        let b = PrincipleId(1);
        add_fact(&mut db, Fact::relation(a, Operator::Implies(Reducibility::Rca), b), Justification::Leaf("base".into()), 1).unwrap();
        let leaf_id = db
            .justifications
            .id_of(&Fact::relation(a, Operator::Implies(Reducibility::Rca), b))
            .unwrap();

        let composite = db.justifications.install(
            Fact::relation(a, Operator::Implies(Reducibility::Computable), b),
            Justification::Composite(vec![leaf_id, leaf_id]),
            3,
        );

        let rendered = render(&db, composite.unwrap());
        assert_eq!(rendered.matches("see above").count(), 1);
    }
}
