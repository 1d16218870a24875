//! TheAudioDB, Deezer and lyrics.ovh adapter tests against a mock server.

mod common;

use serde_json::json;
use songtag_providers::{
    AudioDbClient, DeezerClient, LyricsClient, MetadataProvider, AUDIODB, DEEZER,
};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// TheAudioDB
// =============================================================================

mod audiodb {
    use super::*;

    fn client(server: &MockServer) -> AudioDbClient {
        common::init_tracing();
        AudioDbClient::new(common::http_client(), server.uri())
    }

    #[tokio::test]
    async fn test_search_maps_tracks() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/searchtrack.php"))
            .and(query_param("s", "Queen"))
            .and(query_param("t", "Bohemian Rhapsody"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "track": [{
                    "strTrack": "Bohemian Rhapsody",
                    "strArtist": "Queen",
                    "strAlbum": "A Night at the Opera",
                    "strGenre": "Rock",
                    "intTrackNumber": "11",
                    "intYearReleased": "1975",
                    "strTrackThumb": "https://adb/track.jpg",
                    "strAlbumThumb": "https://adb/album.jpg"
                }]
            })))
            .mount(&server)
            .await;

        let records = client(&server).search("Queen", "Bohemian Rhapsody").await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].album, "A Night at the Opera");
        assert_eq!(records[0].year, "1975");
        assert_eq!(records[0].track, "11");
        assert_eq!(records[0].genre, "Rock");
        assert_eq!(records[0].source, AUDIODB);
        assert_eq!(records[0].cover_url.as_deref(), Some("https://adb/track.jpg"));
        assert!(records[0].release_id.is_none());
    }

    #[tokio::test]
    async fn test_null_track_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/searchtrack.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"track": null})))
            .mount(&server)
            .await;

        assert!(client(&server).search("Nobody", "Nothing").await.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_yields_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/searchtrack.php"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(client(&server).search("Queen", "Bohemian Rhapsody").await.is_empty());
    }
}

// =============================================================================
// Deezer
// =============================================================================

mod deezer {
    use super::*;

    fn client(server: &MockServer) -> DeezerClient {
        common::init_tracing();
        DeezerClient::new(common::http_client(), server.uri(), 5)
    }

    fn track(n: u32) -> serde_json::Value {
        json!({
            "title": format!("Song {n}"),
            "track_position": n,
            "artist": {"name": "Artist"},
            "album": {
                "title": "Album",
                "cover": "https://dz/cover.jpg",
                "cover_medium": "https://dz/cover_medium.jpg",
                "release_date": "2003-02-01"
            }
        })
    }

    #[tokio::test]
    async fn test_search_sends_quoted_query_and_limit() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "artist:\"Artist\" track:\"Song\""))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [track(3)]})))
            .mount(&server)
            .await;

        let records = client(&server).search("Artist", "Song").await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Song 3");
        assert_eq!(records[0].track, "3");
        assert_eq!(records[0].year, "2003");
        assert_eq!(records[0].genre, "");
        assert_eq!(records[0].source, DEEZER);
        assert_eq!(
            records[0].cover_url.as_deref(),
            Some("https://dz/cover_medium.jpg")
        );
    }

    #[tokio::test]
    async fn test_results_capped_at_limit() {
        let server = MockServer::start().await;

        let data: Vec<_> = (1..=8).map(track).collect();
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": data})))
            .mount(&server)
            .await;

        let records = client(&server).search("Artist", "Song").await;

        assert_eq!(records.len(), 5);
        assert_eq!(records[0].title, "Song 1");
        assert_eq!(records[4].title, "Song 5");
    }

    #[tokio::test]
    async fn test_invalid_json_yields_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        assert!(client(&server).search("Artist", "Song").await.is_empty());
    }
}

// =============================================================================
// lyrics.ovh
// =============================================================================

mod lyrics {
    use super::*;

    fn client(server: &MockServer) -> LyricsClient {
        common::init_tracing();
        LyricsClient::new(common::http_client(), server.uri())
    }

    #[tokio::test]
    async fn test_hit_yields_single_lyrics_only_record() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path_regex(r"^/v1/Daft(%20| )Punk/One(%20| )More(%20| )Time$"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"lyrics": "One more time..."})),
            )
            .mount(&server)
            .await;

        let records = client(&server).search("Daft Punk", "One More Time").await;

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.artist, "Daft Punk");
        assert_eq!(record.title, "One More Time");
        assert_eq!(record.album, "");
        assert_eq!(record.year, "");
        assert_eq!(record.track, "");
        assert_eq!(record.genre, "");
        assert_eq!(record.source, "lyrics.ovh (lyrics only)");
        assert!(record.is_lyrics_only());
    }

    #[tokio::test]
    async fn test_not_found_yields_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/Nobody/Nothing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"error": "No lyrics found"})),
            )
            .mount(&server)
            .await;

        assert!(client(&server).search("Nobody", "Nothing").await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_lyrics_is_a_miss() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/Artist/Song"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"lyrics": ""})))
            .mount(&server)
            .await;

        assert!(client(&server).search("Artist", "Song").await.is_empty());
    }
}
