//! Authentication domain: the signed-in user and the hosted auth session.

pub mod entities;
