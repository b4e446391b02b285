/*!
Miscellaneous items which do not belong to a more specific module.
*/

pub mod log;
