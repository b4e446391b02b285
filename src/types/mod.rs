/*!
Types shared across the library, notably [errors](err).
*/

pub mod err;
