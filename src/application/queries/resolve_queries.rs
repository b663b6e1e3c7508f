//! Resolve Queries

/// 按 campaign model 解析随机音色
///
/// `campaign_model_id` 为原始路径参数，由 handler 负责校验
#[derive(Debug, Clone)]
pub struct ResolveVoice {
    pub campaign_model_id: String,
}

impl ResolveVoice {
    pub fn new(campaign_model_id: impl Into<String>) -> Self {
        Self {
            campaign_model_id: campaign_model_id.into(),
        }
    }
}
