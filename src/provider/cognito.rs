use std::error::Error as StdError;
use std::fmt::Debug;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_cognitoidentityprovider::{
    Client,
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    types::{AttributeType, AuthFlowType, AuthenticationResultType, CodeDeliveryDetailsType},
};
use user_auth_api::{CodeDeliveryDetails, UserAttribute, UserDetails};

use super::{
    AuthenticationResult, IdentityProvider, ProviderError, ProviderErrorKind, SignUpCommand,
    SignUpOutput,
};
use crate::config::Config;

/// `IdentityProvider` backed by an Amazon Cognito user pool client.
#[derive(Clone, Debug)]
pub struct CognitoProvider {
    client: Client,
}

impl CognitoProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Loads the AWS configuration, honouring the region and endpoint
    /// overrides from `Config`.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.endpoint_url {
            tracing::info!("Using custom Cognito endpoint: {endpoint}");
            loader = loader.endpoint_url(endpoint);
        }

        Self::new(Client::new(&loader.load().await))
    }
}

#[async_trait]
impl IdentityProvider for CognitoProvider {
    async fn sign_up(&self, command: SignUpCommand) -> Result<SignUpOutput, ProviderError> {
        let attributes = to_attribute_types(command.attributes)?;

        let output = self
            .client
            .sign_up()
            .client_id(command.client_id)
            .username(command.username)
            .password(command.password)
            .set_user_attributes(Some(attributes))
            .send()
            .await
            .map_err(from_sdk_error)?;

        Ok(SignUpOutput {
            user_sub: output.user_sub().to_string(),
            user_confirmed: output.user_confirmed(),
            code_delivery_details: output.code_delivery_details().map(to_code_delivery),
        })
    }

    async fn confirm_sign_up(
        &self,
        client_id: &str,
        username: &str,
        confirmation_code: &str,
    ) -> Result<(), ProviderError> {
        self.client
            .confirm_sign_up()
            .client_id(client_id)
            .username(username)
            .confirmation_code(confirmation_code)
            .send()
            .await
            .map_err(from_sdk_error)?;
        Ok(())
    }

    async fn initiate_password_auth(
        &self,
        client_id: &str,
        username: &str,
        password: &str,
    ) -> Result<Option<AuthenticationResult>, ProviderError> {
        let output = self
            .client
            .initiate_auth()
            .auth_flow(AuthFlowType::UserPasswordAuth)
            .client_id(client_id)
            .auth_parameters("USERNAME", username)
            .auth_parameters("PASSWORD", password)
            .send()
            .await
            .map_err(from_sdk_error)?;

        Ok(output.authentication_result().map(to_authentication_result))
    }

    async fn get_user(&self, access_token: &str) -> Result<UserDetails, ProviderError> {
        let output = self
            .client
            .get_user()
            .access_token(access_token)
            .send()
            .await
            .map_err(from_sdk_error)?;

        Ok(UserDetails {
            username: output.username().to_string(),
            user_attributes: output
                .user_attributes()
                .iter()
                .map(|attr| UserAttribute {
                    name: attr.name().to_string(),
                    value: attr.value().map(str::to_string),
                })
                .collect(),
        })
    }

    async fn update_user_attributes(
        &self,
        access_token: &str,
        attributes: Vec<UserAttribute>,
    ) -> Result<Vec<CodeDeliveryDetails>, ProviderError> {
        let attributes = to_attribute_types(attributes)?;

        let output = self
            .client
            .update_user_attributes()
            .access_token(access_token)
            .set_user_attributes(Some(attributes))
            .send()
            .await
            .map_err(from_sdk_error)?;

        Ok(output
            .code_delivery_details_list()
            .iter()
            .map(to_code_delivery)
            .collect())
    }

    async fn change_password(
        &self,
        access_token: &str,
        previous_password: &str,
        proposed_password: &str,
    ) -> Result<(), ProviderError> {
        self.client
            .change_password()
            .access_token(access_token)
            .previous_password(previous_password)
            .proposed_password(proposed_password)
            .send()
            .await
            .map_err(from_sdk_error)?;
        Ok(())
    }

    async fn forgot_password(
        &self,
        client_id: &str,
        username: &str,
    ) -> Result<Option<CodeDeliveryDetails>, ProviderError> {
        let output = self
            .client
            .forgot_password()
            .client_id(client_id)
            .username(username)
            .send()
            .await
            .map_err(from_sdk_error)?;

        Ok(output.code_delivery_details().map(to_code_delivery))
    }
}

fn from_sdk_error<E, R>(err: SdkError<E, R>) -> ProviderError
where
    E: ProvideErrorMetadata + StdError + 'static,
    R: Debug,
{
    let fallback = DisplayErrorContext(&err).to_string();
    match err.as_service_error() {
        Some(service) => ProviderError::from_parts(service.code(), service.message(), &fallback),
        None => ProviderError::from_parts(None, None, &fallback),
    }
}

fn to_attribute_types(attributes: Vec<UserAttribute>) -> Result<Vec<AttributeType>, ProviderError> {
    attributes
        .into_iter()
        .map(|attr| {
            AttributeType::builder()
                .name(attr.name)
                .set_value(attr.value)
                .build()
                .map_err(|e| ProviderError::new(ProviderErrorKind::InvalidParameter, e.to_string()))
        })
        .collect()
}

fn to_code_delivery(details: &CodeDeliveryDetailsType) -> CodeDeliveryDetails {
    CodeDeliveryDetails {
        destination: details.destination().map(str::to_string),
        delivery_medium: details.delivery_medium().map(|m| m.as_str().to_string()),
        attribute_name: details.attribute_name().map(str::to_string),
    }
}

fn to_authentication_result(result: &AuthenticationResultType) -> AuthenticationResult {
    AuthenticationResult {
        access_token: result.access_token().map(str::to_string),
        refresh_token: result.refresh_token().map(str::to_string),
        id_token: result.id_token().map(str::to_string),
    }
}
