use serde::{Deserialize, Deserializer, Serialize};

/// Community member profile as stored in the profiles collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ProfileDocument")]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(rename = "profileType")]
    pub profile_type: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: Option<String>,
    pub expertise: Vec<String>,
    pub needs: Vec<String>,
    #[serde(rename = "assetTypes")]
    pub asset_types: Vec<String>,
    pub markets: Vec<String>,
}

impl Profile {
    /// Profile with the given id and no tags
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            profile_type: String::new(),
            avatar_url: None,
            expertise: vec![],
            needs: vec![],
            asset_types: vec![],
            markets: vec![],
        }
    }
}

/// Wire shape of a profile document
///
/// Appwrite documents carry their id as `$id` and may also hold a user
/// `id` attribute; `$id` wins when both are present.
#[derive(Deserialize)]
struct ProfileDocument {
    #[serde(rename = "$id", default)]
    document_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(rename = "profileType", alias = "profile_type", default, deserialize_with = "null_as_default")]
    profile_type: String,
    #[serde(rename = "avatarUrl", alias = "avatar_url", default)]
    avatar_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    expertise: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    needs: Vec<String>,
    #[serde(rename = "assetTypes", alias = "asset_types", default, deserialize_with = "null_as_default")]
    asset_types: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    markets: Vec<String>,
}

impl TryFrom<ProfileDocument> for Profile {
    type Error = String;

    fn try_from(doc: ProfileDocument) -> Result<Self, Self::Error> {
        let id = doc
            .document_id
            .or(doc.id)
            .ok_or_else(|| "profile document has neither `$id` nor `id`".to_string())?;

        Ok(Self {
            id,
            name: doc.name,
            profile_type: doc.profile_type,
            avatar_url: doc.avatar_url,
            expertise: doc.expertise,
            needs: doc.needs,
            asset_types: doc.asset_types,
            markets: doc.markets,
        })
    }
}

/// Absent and `null` values both read as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A candidate profile with its compatibility score against the requester
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
}

/// Scoring weights
///
/// Each term contributes `(overlap / overlap_divisor) * weight`.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub markets: f64,
    pub asset_types: f64,
    pub shared_expertise: f64,
    pub needs_met: f64,
    pub needs_offered: f64,
    pub overlap_divisor: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            markets: 0.20,
            asset_types: 0.15,
            shared_expertise: 0.10,
            needs_met: 0.40,
            needs_offered: 0.15,
            overlap_divisor: 3.0,
        }
    }
}

/// Weighted contribution of each scoring term for one requester/candidate pair
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub markets: f64,
    pub asset_types: f64,
    pub shared_expertise: f64,
    /// Candidate's expertise answering the requester's needs
    pub needs_met: f64,
    /// Requester's expertise answering the candidate's needs
    pub needs_offered: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.markets + self.asset_types + self.shared_expertise + self.needs_met + self.needs_offered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_appwrite_document() {
        let doc = serde_json::json!({
            "$id": "u1",
            "name": "Dana",
            "profile_type": "investor",
            "expertise": ["Capital"],
            "needs": null,
            "asset_types": ["Retail", "Retail"],
        });

        let profile: Profile = serde_json::from_value(doc).unwrap();

        assert_eq!(profile.id, "u1");
        assert_eq!(profile.profile_type, "investor");
        assert!(profile.avatar_url.is_none());
        assert!(profile.needs.is_empty());
        assert!(profile.markets.is_empty());
        assert_eq!(profile.asset_types, vec!["Retail", "Retail"]);
    }

    #[test]
    fn test_null_name_and_type_read_as_empty() {
        let doc = serde_json::json!({
            "$id": "u1",
            "name": null,
            "profileType": null,
            "avatarUrl": null,
            "expertise": null,
        });

        let profile: Profile = serde_json::from_value(doc).unwrap();

        assert_eq!(profile.id, "u1");
        assert_eq!(profile.name, "");
        assert_eq!(profile.profile_type, "");
        assert!(profile.expertise.is_empty());
    }

    #[test]
    fn test_document_id_wins_over_id_attribute() {
        let doc = serde_json::json!({ "$id": "doc-1", "id": "legacy-7", "name": "Dana" });

        let profile: Profile = serde_json::from_value(doc).unwrap();

        assert_eq!(profile.id, "doc-1");
    }

    #[test]
    fn test_plain_id_and_missing_id() {
        let profile: Profile = serde_json::from_value(serde_json::json!({ "id": "u9" })).unwrap();
        assert_eq!(profile.id, "u9");

        let missing = serde_json::from_value::<Profile>(serde_json::json!({ "name": "No id" }));
        assert!(missing.is_err());
    }

    #[test]
    fn test_scored_candidate_round_trips_through_json() {
        let candidate = ScoredCandidate {
            profile: Profile::new("u3"),
            match_score: 0.25,
        };

        let json = serde_json::to_string(&candidate).unwrap();
        let back: ScoredCandidate = serde_json::from_str(&json).unwrap();

        assert_eq!(back.profile.id, "u3");
        assert_eq!(back.match_score, 0.25);
    }

    #[test]
    fn test_scored_candidate_serializes_flat() {
        let candidate = ScoredCandidate {
            profile: Profile::new("u2"),
            match_score: 0.5,
        };

        let json = serde_json::to_value(&candidate).unwrap();

        assert_eq!(json["id"], "u2");
        assert_eq!(json["matchScore"], 0.5);
        assert!(json.get("assetTypes").is_some());
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = ScoringWeights::default();
        let sum = w.markets + w.asset_types + w.shared_expertise + w.needs_met + w.needs_offered;
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(w.overlap_divisor, 3.0);
    }
}
