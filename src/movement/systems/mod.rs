//! Movement domain: system modules for contact sensing.

pub(crate) mod collisions;

pub(crate) use collisions::{
    reset_contacts, sense_contacts, update_collisions, update_raycast_origins,
    wake_sleeping_bodies,
};
