//! Campaign service
//!
//! Brand-side campaign operations under `/api/campaigns`.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tracing::info;

use super::http::{path_segment, ApiClient};
use crate::models::campaign::{Campaign, CampaignForm, CampaignStats};
use crate::utils::errors::{InfluenceHubError, Result};

pub const CAMPAIGNS_PATH: &str = "/api/campaigns";
pub const MY_CAMPAIGNS_PATH: &str = "/api/campaigns/my";
pub const STATS_PATH: &str = "/api/campaigns/stats";
pub const CREATE_PATH: &str = "/api/campaigns/create";
pub const UPDATE_PATH: &str = "/api/campaigns/update";
pub const DELETE_PATH: &str = "/api/campaigns/delete";

#[derive(Clone, Debug)]
pub struct CampaignService {
    api: ApiClient,
}

impl CampaignService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, token: &str) -> Result<Vec<Campaign>> {
        self.api.get_json(token, CAMPAIGNS_PATH).await
    }

    /// Campaigns created by the token's owner
    pub async fn mine(&self, token: &str) -> Result<Vec<Campaign>> {
        self.api.get_json(token, MY_CAMPAIGNS_PATH).await
    }

    pub async fn stats(&self, token: &str) -> Result<CampaignStats> {
        self.api.get_json(token, STATS_PATH).await
    }

    pub async fn create(&self, token: &str, form: &CampaignForm) -> Result<serde_json::Value> {
        form.validate()?;
        let created = self
            .api
            .send_multipart(Method::POST, token, CREATE_PATH, campaign_multipart(form)?)
            .await?;
        info!(title = %form.title, images = form.images.len(), "Campaign created");
        Ok(created)
    }

    pub async fn update(&self, token: &str, id: &str, form: &CampaignForm) -> Result<serde_json::Value> {
        form.validate()?;
        let path = format!("{}/{}", UPDATE_PATH, path_segment(id));
        let updated = self
            .api
            .send_multipart(Method::PUT, token, &path, campaign_multipart(form)?)
            .await?;
        info!(campaign_id = id, "Campaign updated");
        Ok(updated)
    }

    pub async fn delete(&self, token: &str, id: &str) -> Result<()> {
        let path = format!("{}/{}", DELETE_PATH, path_segment(id));
        self.api.send_discarding_body(Method::DELETE, token, &path).await?;
        info!(campaign_id = id, "Campaign deleted");
        Ok(())
    }
}

fn campaign_multipart(form: &CampaignForm) -> Result<Form> {
    let mut multipart = Form::new()
        .text("title", form.title.clone())
        .text("description", form.description.clone())
        .text("budget", form.budget.clone());

    for (index, image) in form.images.iter().enumerate() {
        let part = Part::bytes(image.bytes.clone())
            .file_name(format!("image_{}.jpg", index))
            .mime_str(&image.mime_type)
            .map_err(|e| InfluenceHubError::Validation(format!("Invalid image type {}: {}", image.mime_type, e)))?;
        multipart = multipart.part("images", part);
    }

    Ok(multipart)
}
