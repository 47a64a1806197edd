pub mod identicons;
