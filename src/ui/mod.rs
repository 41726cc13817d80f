// Console front-end for the RSA demo

pub mod app;
