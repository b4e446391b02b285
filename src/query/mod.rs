/*!
The query resolver (§4.5): answers whether a fact holds, substituting a
registered conjunction for an unregistered one where possible, and
reconstructs a human-readable proof (§4.6).
*/

pub mod proof;
pub mod resolve;
