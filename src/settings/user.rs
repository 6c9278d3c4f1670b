//! The user settings record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-channel notification toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub account_activity: bool,
    pub new_features: bool,
    pub marketing: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            account_activity: true,
            new_features: true,
            marketing: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub share_usage_data: bool,
    pub allow_recommendations: bool,
    pub profile_visible: bool,
    pub show_activity: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            share_usage_data: true,
            allow_recommendations: true,
            profile_visible: true,
            show_activity: true,
        }
    }
}

/// Profile and preferences of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub language: String,
    pub currency: String,
    pub two_factor_enabled: bool,
    pub email_notifications: NotificationSettings,
    pub push_notifications: NotificationSettings,
    pub privacy: PrivacySettings,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            full_name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            avatar: "/placeholder.svg?height=40&width=40".to_string(),
            language: "English".to_string(),
            currency: "USD ($)".to_string(),
            two_factor_enabled: false,
            email_notifications: NotificationSettings::default(),
            push_notifications: NotificationSettings::default(),
            privacy: PrivacySettings::default(),
        }
    }
}

/// Identifier of a boolean preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingField {
    TwoFactor,
    EmailAccountActivity,
    EmailNewFeatures,
    EmailMarketing,
    PushAccountActivity,
    PushNewFeatures,
    PushMarketing,
    ShareUsageData,
    AllowRecommendations,
    ProfileVisible,
    ShowActivity,
}

impl SettingField {
    pub const ALL: [SettingField; 11] = [
        SettingField::TwoFactor,
        SettingField::EmailAccountActivity,
        SettingField::EmailNewFeatures,
        SettingField::EmailMarketing,
        SettingField::PushAccountActivity,
        SettingField::PushNewFeatures,
        SettingField::PushMarketing,
        SettingField::ShareUsageData,
        SettingField::AllowRecommendations,
        SettingField::ProfileVisible,
        SettingField::ShowActivity,
    ];

    /// Kebab-case wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            SettingField::TwoFactor => "two-factor",
            SettingField::EmailAccountActivity => "email-account-activity",
            SettingField::EmailNewFeatures => "email-new-features",
            SettingField::EmailMarketing => "email-marketing",
            SettingField::PushAccountActivity => "push-account-activity",
            SettingField::PushNewFeatures => "push-new-features",
            SettingField::PushMarketing => "push-marketing",
            SettingField::ShareUsageData => "share-usage-data",
            SettingField::AllowRecommendations => "allow-recommendations",
            SettingField::ProfileVisible => "profile-visible",
            SettingField::ShowActivity => "show-activity",
        }
    }
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown setting '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for SettingField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl UserSettings {
    /// Set a boolean preference.
    pub fn set(&mut self, field: SettingField, value: bool) {
        *self.slot(field) = value;
    }

    /// Read a boolean preference.
    pub fn get(&self, field: SettingField) -> bool {
        match field {
            SettingField::TwoFactor => self.two_factor_enabled,
            SettingField::EmailAccountActivity => self.email_notifications.account_activity,
            SettingField::EmailNewFeatures => self.email_notifications.new_features,
            SettingField::EmailMarketing => self.email_notifications.marketing,
            SettingField::PushAccountActivity => self.push_notifications.account_activity,
            SettingField::PushNewFeatures => self.push_notifications.new_features,
            SettingField::PushMarketing => self.push_notifications.marketing,
            SettingField::ShareUsageData => self.privacy.share_usage_data,
            SettingField::AllowRecommendations => self.privacy.allow_recommendations,
            SettingField::ProfileVisible => self.privacy.profile_visible,
            SettingField::ShowActivity => self.privacy.show_activity,
        }
    }

    fn slot(&mut self, field: SettingField) -> &mut bool {
        match field {
            SettingField::TwoFactor => &mut self.two_factor_enabled,
            SettingField::EmailAccountActivity => &mut self.email_notifications.account_activity,
            SettingField::EmailNewFeatures => &mut self.email_notifications.new_features,
            SettingField::EmailMarketing => &mut self.email_notifications.marketing,
            SettingField::PushAccountActivity => &mut self.push_notifications.account_activity,
            SettingField::PushNewFeatures => &mut self.push_notifications.new_features,
            SettingField::PushMarketing => &mut self.push_notifications.marketing,
            SettingField::ShareUsageData => &mut self.privacy.share_usage_data,
            SettingField::AllowRecommendations => &mut self.privacy.allow_recommendations,
            SettingField::ProfileVisible => &mut self.privacy.profile_visible,
            SettingField::ShowActivity => &mut self.privacy.show_activity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = UserSettings::default();
        assert!(!settings.get(SettingField::TwoFactor));
        assert!(!settings.get(SettingField::EmailMarketing));
        assert!(!settings.get(SettingField::PushMarketing));
        assert!(settings.get(SettingField::ShowActivity));
    }

    #[test]
    fn test_set_touches_only_its_field() {
        let mut settings = UserSettings::default();
        settings.set(SettingField::PushMarketing, true);

        assert!(settings.push_notifications.marketing);
        assert!(!settings.email_notifications.marketing);

        for field in SettingField::ALL {
            let before = settings.get(field);
            let mut copy = settings.clone();
            copy.set(field, !before);
            assert_eq!(copy.get(field), !before);
            let changed = SettingField::ALL
                .into_iter()
                .filter(|f| copy.get(*f) != settings.get(*f))
                .count();
            assert_eq!(changed, 1, "{}", field);
        }
    }

    #[test]
    fn test_field_names_round_trip_through_serde() {
        for field in SettingField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
            assert_eq!(field.as_str().parse::<SettingField>(), Ok(field));
        }
        assert_eq!(
            "dark-mode".parse::<SettingField>(),
            Err(UnknownField("dark-mode".into()))
        );
    }
}
