pub mod advection1d;
pub mod grid;
pub mod hydro1d;
