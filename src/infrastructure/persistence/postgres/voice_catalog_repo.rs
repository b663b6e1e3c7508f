//! PostgreSQL Voice Catalog

use async_trait::async_trait;
use futures_util::{Stream, TryStreamExt};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use super::DbPool;
use crate::application::ports::{
    ActiveVoiceRecord, RecordingRecord, RepositoryError, VoiceCatalogPort,
};
use crate::domain::voice::{CampaignModelId, CampaignModelVoiceId};

const ACTIVE_VOICES_SQL: &str = r#"
    SELECT cmv.id::BIGINT AS id, v.name AS voice_name
    FROM campaign_model_voice cmv
    JOIN voices v ON cmv.voice_id = v.id
    WHERE cmv.campaign_model_id = $1 AND cmv.active = true
    ORDER BY cmv.id
"#;

const RECORDINGS_SQL: &str = r#"
    SELECT vc.name AS category_name, vr.name AS recording_name
    FROM voice_recordings vr
    JOIN voice_recording_categories vrc ON vr.id = vrc.voice_recording_id
    JOIN voice_categories vc ON vrc.voice_category_id = vc.id
    WHERE vr.campaign_model_voice_id = $1
    ORDER BY vc.name, vr.name
"#;

/// PostgreSQL Voice Catalog
pub struct PgVoiceCatalog {
    pool: DbPool,
}

impl PgVoiceCatalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ActiveVoiceRow {
    id: i64,
    voice_name: String,
}

impl From<ActiveVoiceRow> for ActiveVoiceRecord {
    fn from(row: ActiveVoiceRow) -> Self {
        ActiveVoiceRecord {
            id: row.id,
            voice_name: row.voice_name,
        }
    }
}

fn decode_recording(row: &PgRow) -> Result<RecordingRecord, RepositoryError> {
    let category_name: String = row
        .try_get("category_name")
        .map_err(|e| RepositoryError::Corrupted(e.to_string()))?;
    let recording_name: String = row
        .try_get("recording_name")
        .map_err(|e| RepositoryError::Corrupted(e.to_string()))?;

    Ok(RecordingRecord {
        category_name,
        recording_name,
    })
}

/// 将驱动错误归类
fn classify(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => RepositoryError::Unavailable(err.to_string()),
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::TypeNotFound { .. } => RepositoryError::Corrupted(err.to_string()),
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// 逐行读取并解码
///
/// 首行之前的错误按驱动错误归类；已读到数据后的错误视为迭代中断
async fn collect_rows<S, R, T, F>(mut rows: S, decode: F) -> Result<Vec<T>, RepositoryError>
where
    S: Stream<Item = Result<R, sqlx::Error>> + Unpin,
    F: Fn(&R) -> Result<T, RepositoryError>,
{
    let mut decoded = Vec::new();
    loop {
        let row = match rows.try_next().await {
            Ok(Some(row)) => row,
            Ok(None) => break,
            Err(e) if decoded.is_empty() => return Err(classify(e)),
            Err(e) => return Err(RepositoryError::IterationFailed(e.to_string())),
        };
        decoded.push(decode(&row)?);
    }

    Ok(decoded)
}

#[async_trait]
impl VoiceCatalogPort for PgVoiceCatalog {
    async fn find_active_voices(
        &self,
        campaign_model_id: CampaignModelId,
    ) -> Result<Vec<ActiveVoiceRecord>, RepositoryError> {
        let rows: Vec<ActiveVoiceRow> = sqlx::query_as(ACTIVE_VOICES_SQL)
            .bind(campaign_model_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(classify)?;

        Ok(rows.into_iter().map(ActiveVoiceRecord::from).collect())
    }

    async fn find_recordings(
        &self,
        association_id: CampaignModelVoiceId,
    ) -> Result<Vec<RecordingRecord>, RepositoryError> {
        // 流被 drop（请求取消或提前返回）时停止读取并归还连接
        let rows = sqlx::query(RECORDINGS_SQL)
            .bind(association_id.value())
            .fetch(&self.pool);

        collect_rows(rows, decode_recording).await
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(classify)?;
        Ok(())
    }
}
