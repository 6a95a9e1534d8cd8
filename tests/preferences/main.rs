mod helpers;
mod persistence;
mod validation;
