//! Owning collection of profiles for one console session.
//!
//! Profiles leave the live registry count when the roster releases them,
//! either through [`Roster::drain`] or when the roster itself is dropped.

use crate::Profile;

#[derive(Debug, Default)]
pub struct Roster {
    profiles: Vec<Profile>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            profiles: Vec::with_capacity(capacity),
        }
    }

    /// Take ownership of a profile, returning it for further updates
    pub fn enroll(&mut self, profile: Profile) -> &mut Profile {
        tracing::debug!("Enrolling profile {} ({})", profile.name(), profile.id());
        self.profiles.push(profile);
        let index = self.profiles.len() - 1;
        &mut self.profiles[index]
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Profile> {
        self.profiles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Profile> {
        self.profiles.iter()
    }

    /// Take a profile back out of the roster
    pub fn remove(&mut self, index: usize) -> Option<Profile> {
        if index < self.profiles.len() {
            Some(self.profiles.remove(index))
        } else {
            None
        }
    }

    /// Release profiles in enrollment order
    ///
    /// Each profile is unregistered as soon as the caller drops it.
    pub fn drain(&mut self) -> std::vec::Drain<'_, Profile> {
        self.profiles.drain(..)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Profile;
    type IntoIter = std::slice::Iter<'a, Profile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
