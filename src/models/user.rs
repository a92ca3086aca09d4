//! User model, roles, and badge derivation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::badge_thresholds;

/// User role, fixed at registration and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Donor,
    Volunteer,
    Receiver,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Volunteer => "volunteer",
            Self::Receiver => "receiver",
        }
    }

    /// Parse a role string from the registration form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "donor" => Some(Self::Donor),
            "volunteer" => Some(Self::Volunteer),
            "receiver" => Some(Self::Receiver),
            _ => None,
        }
    }

    /// The dashboard path for this role, used as the redirect target when a
    /// role gate denies access.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Self::Donor => "/api/v1/donations/dashboard",
            Self::Volunteer => "/api/v1/tasks/dashboard",
            Self::Receiver => "/api/v1/requests/dashboard",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Achievement badge, derived from the user's point total. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "Bronze Helper")]
    BronzeHelper,
    #[serde(rename = "Silver Helper")]
    SilverHelper,
    #[serde(rename = "Gold Helper")]
    GoldHelper,
    #[serde(rename = "Platinum Helper")]
    PlatinumHelper,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Self::BronzeHelper => "Bronze Helper",
            Self::SilverHelper => "Silver Helper",
            Self::GoldHelper => "Gold Helper",
            Self::PlatinumHelper => "Platinum Helper",
        }
    }

    /// Compute the full badge list for a point total. Thresholds are
    /// non-exclusive: a user above the top threshold holds all four badges.
    pub fn for_points(points: i32) -> Vec<Badge> {
        let mut badges = Vec::new();
        if points >= badge_thresholds::BRONZE {
            badges.push(Self::BronzeHelper);
        }
        if points >= badge_thresholds::SILVER {
            badges.push(Self::SilverHelper);
        }
        if points >= badge_thresholds::GOLD {
            badges.push(Self::GoldHelper);
        }
        if points >= badge_thresholds::PLATINUM {
            badges.push(Self::PlatinumHelper);
        }
        badges
    }
}

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub location: String,
    pub phone: Option<String>,
    pub points: i32,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Current badge list, recomputed from the point total on every read
    pub fn badges(&self) -> Vec<Badge> {
        Badge::for_points(self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badges_below_first_threshold() {
        assert!(Badge::for_points(0).is_empty());
        assert!(Badge::for_points(9).is_empty());
    }

    #[test]
    fn test_badges_accumulate() {
        assert_eq!(Badge::for_points(10), vec![Badge::BronzeHelper]);
        assert_eq!(
            Badge::for_points(50),
            vec![Badge::BronzeHelper, Badge::SilverHelper]
        );
        assert_eq!(
            Badge::for_points(150),
            vec![Badge::BronzeHelper, Badge::SilverHelper, Badge::GoldHelper]
        );
    }

    #[test]
    fn test_badges_top_threshold_holds_all_four() {
        let badges = Badge::for_points(200);
        assert_eq!(badges.len(), 4);
        assert_eq!(badges.last(), Some(&Badge::PlatinumHelper));
        assert_eq!(Badge::for_points(10_000).len(), 4);
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("donor"), Some(Role::Donor));
        assert_eq!(Role::parse("volunteer"), Some(Role::Volunteer));
        assert_eq!(Role::parse("receiver"), Some(Role::Receiver));
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse("Donor"), None);
    }
}
