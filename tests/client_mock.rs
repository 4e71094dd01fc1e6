//! Client behaviour against a mock TTS.Monster server.

mod support;

use mockito::Matcher;
use std::time::{Duration, Instant};
use support::{MockServerFixture, API_KEY};
use tts_monster::{Endpoint, Error, PublicVoice, RateLimit, RateLimitPolicy};

#[tokio::test]
async fn test_build_fetches_quota_from_account() {
    let mut fixture = MockServerFixture::new().await;
    let user = fixture.mock_user(145_892, 500_000).await;

    let client = fixture.builder().build().await.expect("build");

    user.assert_async().await;
    assert_eq!(client.quota().usage(), 145_892);
    assert_eq!(client.quota().allowance(), Some(500_000));
    assert!(client.quota().is_enforced());
}

#[tokio::test]
async fn test_build_with_rejected_key_is_invalid_api_key() {
    let mut fixture = MockServerFixture::new().await;
    let _user = fixture
        .server
        .mock("POST", "/user")
        .with_status(401)
        .with_body(r#"{"message":"Unauthorized"}"#)
        .create_async()
        .await;

    let err = fixture.builder().build().await.unwrap_err();
    assert!(matches!(err, Error::InvalidApiKey), "got {:?}", err);
}

#[tokio::test]
async fn test_build_with_incomplete_user_info_fails() {
    let mut fixture = MockServerFixture::new().await;
    let _user = fixture
        .mock_json_response("user", 200, r#"{"current_plan":"free"}"#)
        .await;

    let err = fixture.builder().build().await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse { .. }), "got {:?}", err);
}

#[tokio::test]
async fn test_build_without_enforcement_makes_no_calls() {
    let mut fixture = MockServerFixture::new().await;
    let user = fixture.mock_unreachable("user").await;

    let client = fixture
        .builder()
        .enforce_char_quota(false)
        .build()
        .await
        .expect("build");

    user.assert_async().await;
    assert!(!client.quota().is_enforced());
    assert_eq!(client.quota().allowance(), None);
}

#[tokio::test]
async fn test_generate_sends_request_and_records_usage() {
    let mut fixture = MockServerFixture::new().await;
    let message = "a".repeat(500);
    let generate = fixture
        .mock_generate(PublicVoice::Narrator.id(), &message, Some(500))
        .await;
    let mut client = fixture.client_with_allowance(1000, 0).await;

    let resp = client
        .generate(PublicVoice::Narrator, &message)
        .await
        .expect("generate");

    generate.assert_async().await;
    assert_eq!(resp.url, format!("{}/audio/out.wav", fixture.base_url));
    assert_eq!(resp.character_usage, Some(500));
    assert_eq!(client.quota().usage(), 500);
}

#[tokio::test]
async fn test_quota_scenario_second_request_rejected_locally() {
    let mut fixture = MockServerFixture::new().await;
    let first = "x".repeat(500);
    let generate = fixture
        .mock_generate(PublicVoice::Zeus.id(), &first, Some(500))
        .await;
    let mut client = fixture.client_with_allowance(1000, 0).await;

    client.generate(PublicVoice::Zeus, &first).await.expect("first");
    assert_eq!(client.quota().usage(), 500);

    let err = client
        .generate(PublicVoice::Zeus, &"y".repeat(600))
        .await
        .unwrap_err();
    match err {
        Error::QuotaExceeded {
            requested,
            usage,
            allowance,
        } => assert_eq!((requested, usage, allowance), (600, 500, 1000)),
        other => panic!("expected QuotaExceeded, got {:?}", other),
    }
    assert_eq!(client.quota().usage(), 500);
    // Only the first request reached the server.
    generate.assert_async().await;
}

#[tokio::test]
async fn test_quota_exceeded_performs_no_network_io() {
    let mut fixture = MockServerFixture::new().await;
    let generate = fixture.mock_unreachable("generate").await;
    let mut client = fixture.client_with_allowance(100, 95).await;

    let err = client.generate("voice-id", "more than five").await.unwrap_err();

    assert!(matches!(err, Error::QuotaExceeded { .. }));
    assert!(err.is_local());
    generate.assert_async().await;
    assert_eq!(client.quota().usage(), 95);
}

#[tokio::test]
async fn test_usage_falls_back_to_local_count() {
    let mut fixture = MockServerFixture::new().await;
    let _generate = fixture.mock_generate("voice-id", "héllo", None).await;
    let mut client = fixture.client_with_allowance(1000, 10).await;

    client.generate("voice-id", "héllo").await.expect("generate");

    assert_eq!(client.quota().usage(), 15);
}

#[tokio::test]
async fn test_usage_grows_by_admitted_count_not_server_figure() {
    let mut fixture = MockServerFixture::new().await;
    let message = "a".repeat(100);
    let generate = fixture
        .mock_generate("voice-id", &message, Some(250))
        .await;
    let mut client = fixture.client_with_allowance(1000, 800).await;

    let resp = client.generate("voice-id", &message).await.expect("generate");

    generate.assert_async().await;
    assert_eq!(resp.character_usage, Some(250));
    assert_eq!(client.quota().usage(), 900);
    assert_eq!(client.quota().remaining(), Some(100));
}

#[tokio::test]
async fn test_network_failure_is_transport_error() {
    let mut client = tts_monster::TtsMonsterClient::builder()
        .api_key(API_KEY)
        .base_url("http://127.0.0.1:9")
        .enforce_char_quota(false)
        .timeout(Duration::from_secs(5))
        .build()
        .await
        .expect("build");

    let err = client.generate("voice-id", "hello").await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "got {:?}", err);
    assert!(!err.is_local());
    assert_eq!(err.status(), None);
    assert_eq!(client.quota().usage(), 0);
}

#[tokio::test]
async fn test_enforcement_toggled_at_runtime() {
    let mut fixture = MockServerFixture::new().await;
    let user = fixture.mock_user(990, 1000).await;
    let fits = fixture.mock_generate("voice-id", "hi", Some(2)).await;
    let over = "a".repeat(20);
    let over_quota = fixture.mock_generate("voice-id", &over, Some(20)).await;
    let mut client = fixture
        .builder()
        .enforce_char_quota(false)
        .build()
        .await
        .expect("build");

    // Enabled before the allowance is known: refused until refreshed.
    client.set_enforce_char_quota(true);
    let err = client.generate("voice-id", "hi").await.unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }), "got {:?}", err);
    assert!(err.is_local());

    client.refresh_quota().await.expect("refresh");
    user.assert_async().await;
    client.generate("voice-id", "hi").await.expect("fits");
    assert_eq!(client.quota().usage(), 992);

    let err = client.generate("voice-id", &over).await.unwrap_err();
    assert!(matches!(err, Error::QuotaExceeded { .. }));
    assert_eq!(client.quota().usage(), 992);

    client.set_enforce_char_quota(false);
    client.generate("voice-id", &over).await.expect("sent anyway");

    fits.assert_async().await;
    over_quota.assert_async().await;
    assert_eq!(client.quota().usage(), 1012);
}

#[tokio::test]
async fn test_disabled_enforcement_propagates_remote_rejection() {
    let mut fixture = MockServerFixture::new().await;
    let generate = fixture
        .mock_json_response(
            "generate",
            402,
            r#"{"message":"Character allowance exceeded"}"#,
        )
        .await;
    let mut client = fixture
        .builder()
        .enforce_char_quota(false)
        .character_allowance(10)
        .character_usage(10)
        .build()
        .await
        .expect("build");

    let err = client.generate("voice-id", "over the limit").await.unwrap_err();

    generate.assert_async().await;
    match err {
        Error::Remote { status, message } => {
            assert_eq!(status, 402);
            assert_eq!(message, "Character allowance exceeded");
        }
        other => panic!("expected Remote, got {:?}", other),
    }
    assert_eq!(client.quota().usage(), 10);
}

#[tokio::test]
async fn test_message_too_long_is_rejected_locally() {
    let mut fixture = MockServerFixture::new().await;
    let generate = fixture.mock_unreachable("generate").await;
    let mut client = fixture
        .builder()
        .enforce_char_quota(false)
        .build()
        .await
        .expect("build");

    let err = client.generate("voice-id", &"z".repeat(501)).await.unwrap_err();

    assert!(matches!(
        err,
        Error::MessageTooLong {
            length: 501,
            limit: 500
        }
    ));
    generate.assert_async().await;
}

#[tokio::test]
async fn test_empty_voice_id_is_validation_error() {
    let fixture = MockServerFixture::new().await;
    let mut client = fixture.client_with_allowance(1000, 0).await;

    let err = client.generate("  ", "hello").await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[tokio::test]
async fn test_get_voices_parses_listing() {
    let mut fixture = MockServerFixture::new().await;
    let voices = fixture
        .mock_json_response(
            "voices",
            200,
            r#"{
                "voices": [
                    {"voice_id": "v-1", "name": "Axel", "sample": "https://x/axel.wav"},
                    {"voice_id": "v-2", "name": "Breeze", "sample": "https://x/breeze.wav"}
                ],
                "customVoices": [{"voice_id": "c-1", "name": "Mine"}]
            }"#,
        )
        .await;
    let mut client = fixture.client_with_allowance(1000, 0).await;

    let listing = client.get_voices().await.expect("voices");

    voices.assert_async().await;
    assert_eq!(listing.voices.len(), 2);
    assert_eq!(listing.custom_voices[0].voice_id, "c-1");
    assert_eq!(listing.find("breeze").map(|v| v.voice_id.as_str()), Some("v-2"));
}

#[tokio::test]
async fn test_requests_carry_user_agent() {
    let mut fixture = MockServerFixture::new().await;
    let user = fixture
        .server
        .mock("POST", "/user")
        .match_header("authorization", API_KEY)
        .match_header("user-agent", Matcher::Regex(r"^tts-monster-rs/\d+\.\d+\.\d+".into()))
        .with_status(200)
        .with_body(r#"{"character_usage": 1, "character_allowance": 2}"#)
        .create_async()
        .await;
    let mut client = fixture.client_with_allowance(1000, 0).await;

    let info = client.get_user().await.expect("user");

    user.assert_async().await;
    assert_eq!(info.remaining_characters(), 1);
    // get_user leaves the local counters alone.
    assert_eq!(client.quota().allowance(), Some(1000));
}

#[tokio::test]
async fn test_refresh_quota_replaces_local_figures() {
    let mut fixture = MockServerFixture::new().await;
    let _user = fixture.mock_user(700, 800).await;
    let mut client = fixture.client_with_allowance(1000, 0).await;

    client.refresh_quota().await.expect("refresh");

    assert_eq!(client.quota().usage(), 700);
    assert_eq!(client.quota().remaining(), Some(100));
}

#[tokio::test]
async fn test_success_without_json_is_invalid_response() {
    let mut fixture = MockServerFixture::new().await;
    let _voices = fixture.mock_json_response("voices", 200, "<html>oops</html>").await;
    let mut client = fixture.client_with_allowance(1000, 0).await;

    let err = client.get_voices().await.unwrap_err();
    match err {
        Error::InvalidResponse { endpoint, .. } => assert_eq!(endpoint, "voices"),
        other => panic!("expected InvalidResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn test_reject_policy_fails_fast_when_rate_limited() {
    let mut fixture = MockServerFixture::new().await;
    let voices = fixture
        .server
        .mock("POST", "/voices")
        .with_status(200)
        .with_body(r#"{"voices": [], "customVoices": []}"#)
        .expect(1)
        .create_async()
        .await;
    let mut client = fixture
        .builder()
        .enforce_char_quota(false)
        .rate_limit_policy(RateLimitPolicy::Reject)
        .rate_limit(
            Endpoint::Voices,
            RateLimit::new(1, Duration::from_secs(60)).unwrap(),
        )
        .build()
        .await
        .expect("build");

    client.get_voices().await.expect("first call");
    let err = client.get_voices().await.unwrap_err();

    assert!(matches!(
        err,
        Error::RateLimited {
            endpoint: Endpoint::Voices,
            ..
        }
    ));
    voices.assert_async().await;
}

#[tokio::test]
async fn test_download_audio_returns_bytes() {
    let mut fixture = MockServerFixture::new().await;
    let _generate = fixture.mock_generate("voice-id", "hi", Some(2)).await;
    let audio = fixture
        .server
        .mock("GET", "/audio/out.wav")
        .with_status(200)
        .with_header("content-type", "audio/wav")
        .with_body(b"RIFF....WAVE")
        .create_async()
        .await;
    let mut client = fixture.client_with_allowance(1000, 0).await;

    let generated = client.generate("voice-id", "hi").await.expect("generate");
    let bytes = client.download_audio(&generated).await.expect("download");

    audio.assert_async().await;
    assert_eq!(&bytes[..], b"RIFF....WAVE");
}

#[tokio::test]
async fn test_default_wait_policy_delays_dispatch() {
    let mut fixture = MockServerFixture::new().await;
    let voices = fixture
        .server
        .mock("POST", "/voices")
        .with_status(200)
        .with_body(r#"{"voices": [], "customVoices": []}"#)
        .expect(2)
        .create_async()
        .await;
    let mut client = fixture
        .builder()
        .enforce_char_quota(false)
        .rate_limit(
            Endpoint::Voices,
            RateLimit::new(1, Duration::from_millis(200)).unwrap(),
        )
        .build()
        .await
        .expect("build");
    assert_eq!(client.rate_limiter().policy(), RateLimitPolicy::Wait);

    let start = Instant::now();
    client.get_voices().await.expect("first call");
    client.get_voices().await.expect("delayed call");

    assert!(start.elapsed() >= Duration::from_millis(150));
    voices.assert_async().await;
}
