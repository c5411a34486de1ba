//! End-to-end scenarios for the rental system.

mod rental;
