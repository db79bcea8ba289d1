use crate::api_client::FoscamApiClient;
use crate::error::Result;
use crate::params::Params;
use crate::response::CommandResponse;

impl FoscamApiClient {
    // ========================================================================
    // Accounts
    // ========================================================================

    pub async fn add_account(&self) -> Result<CommandResponse> {
        self.not_supported("addAccount")
    }

    pub async fn del_account(&self) -> Result<CommandResponse> {
        self.not_supported("delAccount")
    }

    pub async fn change_password(&self) -> Result<CommandResponse> {
        self.not_supported("changePassword")
    }

    pub async fn change_user_name(&self) -> Result<CommandResponse> {
        self.not_supported("changeUserName")
    }

    pub async fn change_user_name_and_pwd_together(&self) -> Result<CommandResponse> {
        self.not_supported("changeUserNameAndPwdTogether")
    }

    pub async fn get_user_list(&self) -> Result<CommandResponse> {
        self.send("getUserList", Params::new()).await
    }

    // ========================================================================
    // Sessions
    // ========================================================================

    /// Log a user in. Either credential defaults to the one the client was
    /// configured with.
    ///
    /// The login password travels as `pwd`, the same key as the request
    /// credentials, so a different password here replaces the configured one
    /// for this request.
    pub async fn log_in(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<CommandResponse> {
        let config = self.config();
        let params = Params::new()
            .with("usrName", username.unwrap_or(&config.username))
            .with("pwd", password.unwrap_or(&config.password));
        self.send("logIn", params).await
    }

    pub async fn log_out(&self, username: Option<&str>) -> Result<CommandResponse> {
        let params = Params::new().with("usrName", username.unwrap_or(&self.config().username));
        self.send("logOut", params).await
    }

    pub async fn get_session_list(&self) -> Result<CommandResponse> {
        self.send("getSessionList", Params::new()).await
    }

    pub async fn usr_beat_heart(&self) -> Result<CommandResponse> {
        self.not_supported("usrBeatHeart")
    }
}
