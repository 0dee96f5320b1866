use gloo_net::http::Request;
use qualboard_core::{
    LeaderboardEntry, LeaderboardQuery, LeaderboardResponse, QualboardError, Qualification,
    QualificationRow,
};
use serde::{Deserialize, Serialize};

/// Signed-in user as reported by the auth provider's session endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SessionEnvelope {
    user: SessionUser,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    detail: Option<String>,
}

fn http_err(e: gloo_net::Error) -> QualboardError {
    QualboardError::Http(e.to_string())
}

pub async fn fetch_leaderboard(
    query: &LeaderboardQuery,
) -> Result<Vec<LeaderboardEntry>, QualboardError> {
    let url = format!("/api/lb?{}", query.to_query_string());
    let resp = Request::get(&url).send().await.map_err(http_err)?;
    if !resp.ok() {
        return Err(QualboardError::Api {
            status: resp.status(),
            message: "leaderboard request failed".to_string(),
        });
    }
    let body: LeaderboardResponse = resp.json().await.map_err(http_err)?;
    Ok(body.result)
}

pub async fn fetch_qualifications(
    token: &str,
) -> Result<Vec<QualificationRow>, QualboardError> {
    let resp = Request::get("/api/qualifications")
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(http_err)?;
    match resp.status() {
        200 => resp.json().await.map_err(http_err),
        401 | 403 => Err(QualboardError::Unauthorized),
        status => Err(QualboardError::Api {
            status,
            message: "qualifications request failed".to_string(),
        }),
    }
}

fn update_qualification_url(team: &str, status: Qualification) -> String {
    format!(
        "/api/qualifications?team={}&status={}",
        urlencoding::encode(team),
        status.ordinal()
    )
}

/// Manual qualification adjustment. A 400 carries a server-side validation
/// detail that is surfaced verbatim.
pub async fn update_qualification(
    token: &str,
    team: &str,
    status: Qualification,
) -> Result<(), QualboardError> {
    let url = update_qualification_url(team, status);
    let resp = Request::put(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(http_err)?;
    match resp.status() {
        200 => Ok(()),
        400 => {
            let detail = resp
                .json::<ErrorDetail>()
                .await
                .ok()
                .and_then(|d| d.detail)
                .unwrap_or_else(|| "invalid qualification update".to_string());
            Err(QualboardError::Validation(detail))
        }
        401 | 403 => Err(QualboardError::Unauthorized),
        status => Err(QualboardError::Api {
            status,
            message: "qualification update failed".to_string(),
        }),
    }
}

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

pub async fn sign_in(email: &str, password: &str) -> Result<(), QualboardError> {
    let resp = Request::post("/auth/sign-in/email")
        .json(&SignInRequest { email, password })
        .map_err(http_err)?
        .send()
        .await
        .map_err(http_err)?;
    match resp.status() {
        200 => Ok(()),
        401 | 403 => Err(QualboardError::Unauthorized),
        status => Err(QualboardError::Api {
            status,
            message: "sign-in failed".to_string(),
        }),
    }
}

pub async fn sign_out() -> Result<(), QualboardError> {
    let resp = Request::post("/auth/sign-out")
        .send()
        .await
        .map_err(http_err)?;
    if resp.ok() {
        Ok(())
    } else {
        Err(QualboardError::Api {
            status: resp.status(),
            message: "sign-out failed".to_string(),
        })
    }
}

/// Current session, or None when not signed in. A failed session probe is
/// treated as "not authenticated" rather than an error.
pub async fn get_session() -> Option<SessionUser> {
    let resp = Request::get("/auth/get-session").send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<Option<SessionEnvelope>>()
        .await
        .ok()
        .flatten()
        .map(|envelope| envelope.user)
}

/// Bearer token for the backend API. Missing or expired session maps to
/// `Unauthorized`; callers skip the guarded action silently.
pub async fn get_jwt() -> Result<String, QualboardError> {
    let resp = Request::get("/auth/token").send().await.map_err(http_err)?;
    match resp.status() {
        200 => {
            let body: TokenResponse = resp.json().await.map_err(http_err)?;
            Ok(body.token)
        }
        _ => Err(QualboardError::Unauthorized),
    }
}
