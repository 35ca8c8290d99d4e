use tracing::{debug, trace};

use crate::math::{
    body::RigidBody,
    manifold::{BodyHandle, PhysManifold},
    point_in_body,
    resolve::{resolve_pair, resolve_static_pair},
    vector::PhysVector2,
    world::StepSettings,
};

/// Indices of the kinematic bodies that move this step, in order.
pub fn active_bodies(kinematic_bodies: &[RigidBody]) -> Vec<usize> {
    let mut active = vec![];
    set_active_bodies(&mut active, kinematic_bodies);
    active
}

/// Refills `active` in place so the buffer can be reused across steps.
pub fn set_active_bodies(active: &mut Vec<usize>, kinematic_bodies: &[RigidBody]) {
    active.clear();
    active.extend(
        kinematic_bodies
            .iter()
            .enumerate()
            .filter(|(_, body)| body.is_active())
            .map(|(index, _)| index),
    );
}

pub fn get_two_body_mut(bodies: &mut [RigidBody], a_index: usize, b_index: usize) -> Option<(&mut RigidBody, &mut RigidBody)> {
    if a_index >= bodies.len() || b_index >= bodies.len() {
        None
    } else if a_index < b_index {
        // `a` is in the left half
        let (left, right) = bodies.split_at_mut(b_index);
        Some((&mut left[a_index], &mut right[0]))
    } else if a_index == b_index {
        // cannot obtain two mutable references to the
        // same element
        None
    } else {
        // `a` is in the right half
        let (left, right) = bodies.split_at_mut(a_index);
        Some((&mut right[0], &mut left[b_index]))
    }
}

/// Resolves every active body against every static body, then against every
/// other kinematic body.
///
/// Pairs are resolved one at a time in iteration order, so a pair sees the
/// positions left by the pairs before it. Returns the resolved contacts in
/// that same order.
pub fn process_kinematic_bodies(
    active: &[usize],
    static_bodies: &[RigidBody],
    kinematic_bodies: &mut [RigidBody],
    predictive_static: bool,
) -> Vec<PhysManifold> {
    let mut contacts: Vec<PhysManifold> = vec![];

    for &a_index in active {
        let Some(body) = kinematic_bodies.get_mut(a_index) else {
            continue;
        };

        for (s_index, fixed) in static_bodies.iter().enumerate() {
            if let Some(penetration) = resolve_static_pair(body, fixed, predictive_static) {
                let contact = PhysManifold::new(a_index, BodyHandle::Static(s_index), penetration);
                trace!("contact {:?} normal={} depth={}", contact.other, contact.normal, contact.depth);
                contacts.push(contact);
            }
        }

        for k_index in 0..kinematic_bodies.len() {
            let Some((body, other)) = get_two_body_mut(kinematic_bodies, a_index, k_index) else {
                continue;
            };

            if let Some(penetration) = resolve_pair(body, other) {
                let contact = PhysManifold::new(a_index, BodyHandle::Kinematic(k_index), penetration);
                trace!("contact {} -> {:?} normal={} depth={}", a_index, contact.other, contact.normal, contact.depth);
                contacts.push(contact);
            }
        }
    }

    contacts
}

/// Owns a scene's bodies and advances them one step at a time.
#[derive(Debug, Default)]
pub struct PhysManager {
    settings: StepSettings,
    static_bodies: Vec<RigidBody>,
    kinematic_bodies: Vec<RigidBody>,
    active: Vec<usize>,
    contacts: Vec<PhysManifold>,
}

impl PhysManager {
    pub fn new(settings: StepSettings) -> Self {
        Self { settings, ..Default::default() }
    }

    pub fn settings(&self) -> &StepSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut StepSettings {
        &mut self.settings
    }

    /// Files the body under its mobility and returns where it went.
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        if body.is_static() {
            self.static_bodies.push(body);
            BodyHandle::Static(self.static_bodies.len() - 1)
        } else {
            self.kinematic_bodies.push(body);
            BodyHandle::Kinematic(self.kinematic_bodies.len() - 1)
        }
    }

    pub fn add_bodies(&mut self, bodies: impl IntoIterator<Item = RigidBody>) -> Vec<BodyHandle> {
        bodies.into_iter().map(|body| self.add_body(body)).collect()
    }

    pub fn get_body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        match handle {
            BodyHandle::Static(index) => self.static_bodies.get(index),
            BodyHandle::Kinematic(index) => self.kinematic_bodies.get(index),
        }
    }

    /// Only kinematic bodies can be handed out mutably; static bodies stay put.
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        match handle {
            BodyHandle::Static(_) => None,
            BodyHandle::Kinematic(index) => self.kinematic_bodies.get_mut(index),
        }
    }

    pub fn static_bodies(&self) -> &[RigidBody] {
        &self.static_bodies
    }

    pub fn kinematic_bodies(&self) -> &[RigidBody] {
        &self.kinematic_bodies
    }

    /// Every body with its handle, static bodies first.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> {
        let statics = self.static_bodies.iter().enumerate().map(|(i, body)| (BodyHandle::Static(i), body));
        let kinematics = self.kinematic_bodies.iter().enumerate().map(|(i, body)| (BodyHandle::Kinematic(i), body));
        statics.chain(kinematics)
    }

    /// Active set computed by the most recent step.
    pub fn active(&self) -> &[usize] {
        &self.active
    }

    /// Contacts resolved by the most recent step.
    pub fn contacts(&self) -> &[PhysManifold] {
        &self.contacts
    }

    /// First body under `point`, kinematic bodies before static ones.
    pub fn body_at_point(&self, point: &PhysVector2) -> Option<BodyHandle> {
        let kinematic = self
            .kinematic_bodies
            .iter()
            .position(|body| point_in_body(point, body))
            .map(BodyHandle::Kinematic);

        kinematic.or_else(|| {
            self.static_bodies
                .iter()
                .position(|body| point_in_body(point, body))
                .map(BodyHandle::Static)
        })
    }

    /// Drops every body, as when a scene is torn down.
    pub fn clear(&mut self) {
        self.static_bodies.clear();
        self.kinematic_bodies.clear();
        self.active.clear();
        self.contacts.clear();
    }

    /// Recomputes the active set, resolves collisions, then moves every
    /// kinematic body by its velocity.
    pub fn step(&mut self) -> &[PhysManifold] {
        set_active_bodies(&mut self.active, &self.kinematic_bodies);

        self.contacts = process_kinematic_bodies(
            &self.active,
            &self.static_bodies,
            &mut self.kinematic_bodies,
            self.settings.predictive_static,
        );

        for body in self.kinematic_bodies.iter_mut() {
            body.update(self.settings.friction, self.settings.rest_epsilon);
        }

        debug!("step: {} active, {} contacts", self.active.len(), self.contacts.len());

        &self.contacts
    }
}
