#![cfg_attr(not(test), no_std)]

//! hubnode - Hub-connected device node for home automation hubs
//!
//! This library provides platform abstraction, device drivers, and the hub
//! command/status protocol for a device node that services actuators from a
//! shared, non-blocking control loop.

// Platform abstraction layer (motion primitive, mock implementations)
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Core infrastructure (time source, logging)
pub mod core;

// Hub communication protocol (command parsing, status reporting)
pub mod communication;
