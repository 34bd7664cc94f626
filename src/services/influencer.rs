//! Influencer service
//!
//! Listing, search and multipart create/update/delete under `/api/influencers`.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tracing::{debug, info};

use super::http::{path_segment, ApiClient};
use super::search::InfluencerSearch;
use crate::models::influencer::{Influencer, InfluencerForm};
use crate::utils::errors::{InfluenceHubError, Result};
use crate::utils::logging::log_admin_action;

pub const INFLUENCERS_PATH: &str = "/api/influencers";
pub const RECENT_PATH: &str = "/api/influencers/recent";
pub const SEARCH_PATH: &str = "/api/influencers/search";
pub const ADD_PATH: &str = "/api/influencers/add";

#[derive(Clone, Debug)]
pub struct InfluencerService {
    api: ApiClient,
}

impl InfluencerService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, token: &str) -> Result<Vec<Influencer>> {
        self.api.get_json(token, INFLUENCERS_PATH).await
    }

    pub async fn recent(&self, token: &str) -> Result<Vec<Influencer>> {
        self.api.get_json(token, RECENT_PATH).await
    }

    pub async fn search(&self, token: &str, search: &InfluencerSearch) -> Result<Vec<Influencer>> {
        let params = search.to_query_pairs();
        debug!(params = ?params, "Searching influencers");
        let results: Vec<Influencer> = self
            .api
            .get_json_with_query(token, SEARCH_PATH, &params)
            .await?;
        debug!(count = results.len(), "Search returned influencers");
        Ok(results)
    }

    pub async fn get(&self, token: &str, id: &str) -> Result<Influencer> {
        self.api.get_json(token, &item_path(id)).await
    }

    pub async fn create(&self, token: &str, form: &InfluencerForm) -> Result<serde_json::Value> {
        form.validate()?;
        let created = self
            .api
            .send_multipart(Method::POST, token, ADD_PATH, influencer_multipart(form)?)
            .await?;
        info!(name = %form.name, media = form.media.len(), "Influencer added");
        Ok(created)
    }

    pub async fn update(&self, token: &str, id: &str, form: &InfluencerForm) -> Result<serde_json::Value> {
        form.validate()?;
        let updated = self
            .api
            .send_multipart(Method::PUT, token, &item_path(id), influencer_multipart(form)?)
            .await?;
        info!(influencer_id = id, "Influencer updated");
        Ok(updated)
    }

    pub async fn delete(&self, token: &str, id: &str) -> Result<()> {
        self.api
            .send_discarding_body(Method::DELETE, token, &item_path(id))
            .await?;
        log_admin_action("delete_influencer", id, None);
        Ok(())
    }
}

fn item_path(id: &str) -> String {
    format!("{}/{}", INFLUENCERS_PATH, path_segment(id))
}

fn influencer_multipart(form: &InfluencerForm) -> Result<Form> {
    let categories = serde_json::to_string(&form.categories)?;
    let social_links = serde_json::to_string(&form.social_links_json())?;

    let mut multipart = Form::new()
        .text("name", form.name.clone())
        .text("age", form.age.clone())
        .text("followers", form.followers.clone())
        .text("description", form.description.clone())
        .text("categories", categories)
        .text("socialLinks", social_links);

    for (index, media) in form.media.iter().enumerate() {
        let part = Part::bytes(media.bytes.clone())
            .file_name(format!("file_{}.{}", index, media.extension()))
            .mime_str(&media.mime_type)
            .map_err(|e| InfluenceHubError::Validation(format!("Invalid media type {}: {}", media.mime_type, e)))?;
        multipart = multipart.part("media", part);
    }

    Ok(multipart)
}
