use bevy::prelude::*;

/// Root of the computer model hierarchy.
#[derive(Component, Reflect)]
pub struct Workstation;

/// The curved glass mesh carrying the CRT material.
#[derive(Component, Reflect)]
pub struct CrtScreen;
