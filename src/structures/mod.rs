/*!
Abstract elements of the knowledge base: [principles](principle), the
[operators](operator) which relate them, the [facts](fact) built from those
operators, and the [justifications](justification) attached to facts.
*/

pub mod fact;
pub mod justification;
pub mod operator;
pub mod principle;
