use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::remote_service;
use crate::Identity;

remote_service! {
    /// User account operations (`user/user`).
    ///
    /// Free-form `data`/`condition` maps are forwarded as-is; their accepted
    /// keys are defined by the remote service.
    pub struct User as user ("user/user") {
        /// Returns the user id owning `mobile`, or `0` when unregistered.
        checkIsExistUserMobile => fn check_is_exist_user_mobile / check_is_exist_user_mobile_async(
            mobile: &str,
        ) -> i64;

        /// Checks the password against the platform strength rules.
        checkPasswordPowerRule => fn check_password_power_rule / check_password_power_rule_async(
            password: &str,
        ) -> bool;

        /// Updates account fields of `user_id`.
        updateUser => fn update_user / update_user_async(user_id: i64, data: &Value) -> bool;

        /// Registers an account and returns the new user id.
        registerUser => fn register_user / register_user_async(data: &Value) -> i64;

        /// Verifies `password` for `username`.
        checkPassword => fn check_password / check_password_async(
            username: &str,
            password: &str,
        ) -> bool;

        /// Fetches the profile matching the credential pair.
        getUserByPassword => fn get_user_by_password / get_user_by_password_async(
            username: &str,
            password: &str,
        ) -> UserProfile;

        /// Profile of the signed-in user.
        getInfo => fn get_info / get_info_async(user: Option<&Identity>) -> UserProfile;

        /// Profiles for a batch of user ids.
        getListByUserIds => fn get_list_by_user_ids / get_list_by_user_ids_async(
            user_ids: &[i64],
        ) -> Vec<UserProfile>;

        /// Creates an account from back-office data and returns the user id.
        addUser => fn add_user / add_user_async(data: &Value) -> i64;

        /// Pages user rows for the search-index feed.
        listUserElasticData => fn list_user_elastic_data / list_user_elastic_data_async(
            current_page: i64,
            limit: i64,
        ) -> Value;

        /// Aggregated "mine" page data for the app.
        getMineDataApp => fn get_mine_data_app / get_mine_data_app_async(user_id: i64) -> Value;

        /// Replaces the avatar of `uid`.
        updateUserAvatar => fn update_user_avatar / update_user_avatar_async(
            uid: i64,
            avatar: &str,
        ) -> bool;

        /// QR name-card payload for `user_id`.
        getCodeCardInfo => fn get_code_card_info / get_code_card_info_async(user_id: i64) -> Value;

        /// Third-party binding status of the signed-in user.
        checkBindStatus => fn check_bind_status / check_bind_status_async(
            bind_type: i64,
            user: Option<&Identity>,
        ) -> Value;

        /// Binds a mobile number to the signed-in user.
        bindingMobile => fn binding_mobile / binding_mobile_async(
            data: &Value,
            user: Option<&Identity>,
        ) -> bool;

        /// Whether `user_id` has a bound mobile, with masked numbers.
        checkUserIsBindingMobile => fn check_user_is_binding_mobile / check_user_is_binding_mobile_async(
            user_id: i64,
        ) -> Value;

        /// Fetches the profile of `uid`.
        getUser => fn get_user / get_user_async(uid: i64) -> UserProfile;

        /// Raw account row for `username`.
        getByUserName => fn get_by_user_name / get_by_user_name_async(username: &str) -> Value;

        /// Creates a legacy UC account and returns its id.
        addUcUser => fn add_uc_user / add_uc_user_async(data: &Value) -> i64;

        /// Edits a legacy UC account; negative results encode UC error codes.
        editUcUser => fn edit_uc_user / edit_uc_user_async(
            username: &str,
            oldpw: &str,
            newpw: &str,
            email: &str,
            ignoreoldpw: i64,
        ) -> i64;

        /// Avatar urls for a comma-separated list of UC user ids.
        getUcAvatarByIds => fn get_uc_avatar_by_ids / get_uc_avatar_by_ids_async(uids: &str) -> Value;

        /// Returns the user id bound to a third-party key, or `0`.
        checkThirdKey => fn check_third_key / check_third_key_async(
            third_type: i64,
            key: &str,
        ) -> i64;

        /// Queries UC account rows by arbitrary fields.
        getInfoByFieldUc => fn get_info_by_field_uc / get_info_by_field_uc_async(
            data: &Value,
        ) -> Value;
    }
}

/// User record returned by the profile operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub uid: i64,
    pub username: String,
    pub mobile: String,
}
