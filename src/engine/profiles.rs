use crate::engine::validate_weights;
use crate::error::{RatingError, Result};
use crate::types::scoring::{Profile, ProfileWeights, StatDefinition};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Weight mapping per player profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ProfileTable {
    profiles: BTreeMap<Profile, ProfileWeights>,
}

impl ProfileTable {
    pub fn insert(&mut self, profile: Profile, weights: ProfileWeights) {
        self.profiles.insert(profile, weights);
    }

    pub fn weights_for(&self, profile: Profile) -> Result<&ProfileWeights> {
        self.profiles
            .get(&profile)
            .ok_or_else(|| RatingError::UnknownProfile(profile.to_string()))
    }

    pub fn profiles(&self) -> impl Iterator<Item = Profile> + '_ {
        self.profiles.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn validate(
        &self,
        definitions: &BTreeMap<String, StatDefinition>,
        tolerance: f64,
    ) -> Result<()> {
        for (profile, weights) in &self.profiles {
            validate_weights(weights, definitions, tolerance).map_err(|err| match err {
                RatingError::InvalidWeights(reason) => {
                    RatingError::InvalidWeights(format!("profiles.{profile}: {reason}"))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}
