use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use podcastindex_api_client::config::ClientConfig;
use podcastindex_api_client::rest::{
    AddByFeedUrlRequest, AddByItunesIdRequest, EpisodeByGuidRequest, EpisodeByIdRequest,
    EpisodesByFeedIdRequest, EpisodesByFeedUrlRequest, EpisodesByItunesIdRequest,
    EpisodesByPodcastGuidRequest, HubNotifyRequest, LiveEpisodesRequest, PodcastIndexClient,
    PodcastsByMediumRequest, RandomEpisodesRequest, RecentEpisodesRequest, RecentFeedsRequest,
    RecentNewFeedsRequest, RecentNewValueFeedsRequest, TrendingRequest,
};

fn build_client(server: &MockServer) -> PodcastIndexClient {
    let config = ClientConfig::new("test-key", "test-secret", "TestApp/1.0")
        .with_base_url(format!("{}/api/1.0", server.uri()));
    PodcastIndexClient::new(config)
}

fn feeds_body() -> serde_json::Value {
    serde_json::json!({
        "status": "true",
        "feeds": [{"id": 920666, "title": "Podcasting 2.0", "medium": "podcast"}],
        "count": 1,
        "description": "Found matching feeds"
    })
}

fn items_body() -> serde_json::Value {
    serde_json::json!({
        "status": "true",
        "items": [{"id": 16795090, "title": "Episode 1", "feedId": 920666, "duration": 3600}],
        "count": 1,
        "description": "Found matching items."
    })
}

async fn mount_get(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/1.0{endpoint}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_podcast_by_feed_id() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "status": "true",
        "query": {"id": "920666"},
        "feed": {
            "id": 920666,
            "title": "Podcasting 2.0",
            "url": "https://feeds.podcastindex.org/pc20.xml",
            "value": {
                "model": {"type": "lightning", "method": "keysend", "suggested": "0.00000005000"},
                "destinations": [{"name": "Podcastindex.org", "type": "node", "address": "03ae9f", "split": 1}]
            }
        },
        "description": "Found matching feed"
    });

    Mock::given(method("GET"))
        .and(path("/api/1.0/podcasts/byfeedid"))
        .and(query_param("id", "920666"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let podcast = client.get_podcast_by_feed_id(920666).await.unwrap();

    let feed = podcast.feed.unwrap();
    assert_eq!(feed.title, "Podcasting 2.0");
    assert_eq!(feed.value.unwrap().total_split(), 1.0);
    assert_eq!(podcast.query.unwrap().id.as_deref(), Some("920666"));
}

#[tokio::test]
async fn test_get_podcast_lookup_miss() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "status": "true",
        "query": {"url": "https://example.com/missing.xml"},
        "feed": [],
        "description": "No feeds match this url."
    });

    Mock::given(method("GET"))
        .and(path("/api/1.0/podcasts/byfeedurl"))
        .and(query_param("url", "https://example.com/missing.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let podcast = client
        .get_podcast_by_feed_url("https://example.com/missing.xml")
        .await
        .unwrap();

    assert!(podcast.feed.is_none());
    assert_eq!(podcast.description, "No feeds match this url.");
}

#[tokio::test]
async fn test_null_fields_fall_back_to_defaults() {
    let server = MockServer::start().await;
    let podcast = serde_json::json!({
        "status": "true",
        "feed": {
            "id": 920666,
            "title": "Podcasting 2.0",
            "author": null,
            "link": null,
            "lastUpdateTime": null,
            "funding": null
        },
        "description": "Found matching feed"
    });
    let episodes = serde_json::json!({
        "status": "true",
        "items": [{
            "id": 16795090,
            "title": null,
            "feedId": null,
            "enclosureLength": null,
            "persons": [{"name": null, "role": "host"}],
            "soundbites": [{"startTime": null, "duration": 30}]
        }],
        "count": 1,
        "description": "Found matching items."
    });

    mount_get(&server, "/podcasts/byfeedid", podcast).await;
    mount_get(&server, "/episodes/byfeedid", episodes).await;

    let client = build_client(&server);

    let feed = client
        .get_podcast_by_feed_id(920666)
        .await
        .unwrap()
        .feed
        .unwrap();
    assert_eq!(feed.title, "Podcasting 2.0");
    assert_eq!(feed.author, "");
    assert_eq!(feed.link, "");
    assert_eq!(feed.last_update_time, 0);
    assert!(feed.funding.is_empty());

    let response = client
        .get_episodes_by_feed_id(&EpisodesByFeedIdRequest::new(920666))
        .await
        .unwrap();
    let episode = &response.items[0];
    assert_eq!(episode.id, 16795090);
    assert_eq!(episode.title, "");
    assert_eq!(episode.feed_id, 0);
    assert_eq!(episode.enclosure_length, 0);
    assert_eq!(episode.persons.as_ref().unwrap()[0].name, "");
    assert_eq!(episode.soundbites.as_ref().unwrap()[0].start_time, 0.0);
}

#[tokio::test]
async fn test_get_podcast_by_guid_and_itunes_id() {
    let server = MockServer::start().await;
    let response = serde_json::json!({"status": "true", "feed": {"id": 1}, "description": "ok"});

    Mock::given(method("GET"))
        .and(path("/api/1.0/podcasts/byguid"))
        .and(query_param("guid", "917393e3-1b1e-5cef-ace4-edaa54e1f810"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/podcasts/byitunesid"))
        .and(query_param("id", "1441923632"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    client
        .get_podcast_by_guid("917393e3-1b1e-5cef-ace4-edaa54e1f810")
        .await
        .unwrap();
    client.get_podcast_by_itunes_id(1441923632).await.unwrap();
}

#[tokio::test]
async fn test_podcast_listings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/podcasts/bytag"))
        .and(query_param("tag", "podcast-value"))
        .and(query_param_is_missing("max"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feeds_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/podcasts/bymedium"))
        .and(query_param("medium", "music"))
        .and(query_param("max", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feeds_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/podcasts/trending"))
        .and(query_param("lang", "en"))
        .and(query_param("cat", "News"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feeds_body()))
        .expect(1)
        .mount(&server)
        .await;
    mount_get(&server, "/podcasts/dead", feeds_body()).await;

    let client = build_client(&server);

    let tagged = client.get_podcasts_by_tag("podcast-value", None).await.unwrap();
    assert_eq!(tagged.feeds[0].id, 920666);

    let request = PodcastsByMediumRequest {
        max: Some(10),
        ..PodcastsByMediumRequest::new("music")
    };
    client.get_podcasts_by_medium(&request).await.unwrap();

    let trending = TrendingRequest {
        lang: Some("en".to_string()),
        cat: Some("News".to_string()),
        ..Default::default()
    };
    client.get_trending_podcasts(Some(&trending)).await.unwrap();

    let dead = client.get_dead_podcasts().await.unwrap();
    assert_eq!(dead.count, 1);
}

#[tokio::test]
async fn test_get_episode_by_id() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "status": "true",
        "id": "16795090",
        "episode": {
            "id": 16795090,
            "title": "Episode 1",
            "feedId": 920666,
            "soundbites": [{"startTime": 1234.5, "duration": 42, "title": "Pull quote"}]
        },
        "description": "Found matching item."
    });

    Mock::given(method("GET"))
        .and(path("/api/1.0/episodes/byid"))
        .and(query_param("id", "16795090"))
        .and(query_param("fulltext", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = EpisodeByIdRequest {
        fulltext: Some(true),
        ..EpisodeByIdRequest::new(16795090)
    };
    let response = client.get_episode_by_id(&request).await.unwrap();

    let episode = response.episode.unwrap();
    assert_eq!(episode.feed_id, 920666);
    let soundbites = episode.soundbites.unwrap();
    assert_eq!(soundbites[0].start_time, 1234.5);
    assert_eq!(soundbites[0].duration, 42.0);
}

#[tokio::test]
async fn test_episode_lookups_by_feed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/episodes/byguid"))
        .and(query_param("guid", "PC2-001"))
        .and(query_param("feedid", "920666"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/episodes/byfeedid"))
        .and(query_param("id", "75075,920666"))
        .and(query_param("max", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/episodes/byfeedurl"))
        .and(query_param("url", "https://feeds.podcastindex.org/pc20.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/episodes/byitunesid"))
        .and(query_param("id", "1441923632"))
        .and(query_param("since", "1700000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/episodes/bypodcastguid"))
        .and(query_param("guid", "abc-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);

    client
        .get_episode_by_guid(&EpisodeByGuidRequest::for_feed_id("PC2-001", 920666))
        .await
        .unwrap();

    let request = EpisodesByFeedIdRequest {
        max: Some(3),
        ..EpisodesByFeedIdRequest::for_feeds(&[75075, 920666])
    };
    let episodes = client.get_episodes_by_feed_id(&request).await.unwrap();
    assert_eq!(episodes.items[0].duration, Some(3600));

    client
        .get_episodes_by_feed_url(&EpisodesByFeedUrlRequest::new(
            "https://feeds.podcastindex.org/pc20.xml",
        ))
        .await
        .unwrap();

    let request = EpisodesByItunesIdRequest {
        since: Some(1_700_000_000),
        ..EpisodesByItunesIdRequest::new(1441923632)
    };
    client.get_episodes_by_itunes_id(&request).await.unwrap();

    let episodes = client
        .get_episodes_by_podcast_guid(&EpisodesByPodcastGuidRequest::new("abc-123"))
        .await
        .unwrap();
    assert_eq!(episodes.episodes().count(), 1);
}

#[tokio::test]
async fn test_random_and_live_episodes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/episodes/random"))
        .and(query_param("max", "2"))
        .and(query_param("notcat", "News,Religion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/episodes/live"))
        .and(query_param_is_missing("max"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);

    let request = RandomEpisodesRequest {
        max: Some(2),
        notcat: Some("News,Religion".to_string()),
        ..Default::default()
    };
    client.get_random_episodes(Some(&request)).await.unwrap();
    client
        .get_live_episodes(Some(&LiveEpisodesRequest::default()))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_recent_endpoints() {
    let server = MockServer::start().await;
    let recent_feeds = serde_json::json!({
        "status": "true",
        "feeds": [{"id": 1, "title": "New Feed"}],
        "count": 1,
        "max": "5",
        "since": 1700000000,
        "description": "Found matching feeds"
    });

    Mock::given(method("GET"))
        .and(path("/api/1.0/recent/episodes"))
        .and(query_param("max", "7"))
        .and(query_param("excludeString", "trailer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/recent/feeds"))
        .and(query_param("since", "1700000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recent_feeds.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/recent/newfeeds"))
        .and(query_param("desc", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recent_feeds.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/recent/newvaluefeeds"))
        .and(query_param("max", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recent_feeds))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);

    let request = RecentEpisodesRequest {
        max: Some(7),
        exclude_string: Some("trailer".to_string()),
        ..Default::default()
    };
    client.get_recent_episodes(Some(&request)).await.unwrap();

    let request = RecentFeedsRequest {
        since: Some(1_700_000_000),
        ..Default::default()
    };
    client.get_recent_feeds(Some(&request)).await.unwrap();

    let request = RecentNewFeedsRequest {
        desc: Some(true),
        ..Default::default()
    };
    client.get_recent_new_feeds(Some(&request)).await.unwrap();

    let request = RecentNewValueFeedsRequest {
        max: Some(5),
        since: None,
    };
    let feeds = client
        .get_recent_new_value_feeds(Some(&request))
        .await
        .unwrap();
    assert_eq!(feeds.max, Some(5));
    assert_eq!(feeds.feeds[0].title, "New Feed");
}

#[tokio::test]
async fn test_recent_soundbites() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "status": "true",
        "items": [{
            "enclosureUrl": "https://example.com/ep1.mp3",
            "title": "Best bit",
            "startTime": 73,
            "duration": 60,
            "episodeId": 16795090,
            "episodeTitle": "Episode 1",
            "feedTitle": "Podcasting 2.0",
            "feedUrl": "https://feeds.podcastindex.org/pc20.xml",
            "feedId": 920666
        }],
        "count": 1,
        "description": "Found matching soundbites"
    });

    Mock::given(method("GET"))
        .and(path("/api/1.0/recent/soundbites"))
        .and(query_param("max", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let soundbites = client.get_recent_soundbites(Some(1)).await.unwrap();

    assert_eq!(soundbites.count, 1);
    assert_eq!(soundbites.items[0].episode_id, 16795090);
    assert_eq!(soundbites.items[0].start_time, 73.0);
}

#[tokio::test]
async fn test_value_lookups() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "status": "true",
        "query": {"id": 920666},
        "value": {
            "model": {"type": "lightning", "method": "keysend", "suggested": "0.00000005000"},
            "destinations": [
                {"name": "Host", "type": "node", "address": "03ae9f", "split": 99},
                {"name": "App", "type": "node", "address": "02d5c1", "split": 1, "fee": true}
            ]
        },
        "description": "Found matching feed"
    });

    Mock::given(method("GET"))
        .and(path("/api/1.0/value/byfeedid"))
        .and(query_param("id", "920666"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/value/byfeedurl"))
        .and(query_param("url", "https://feeds.podcastindex.org/pc20.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/value/bypodcastguid"))
        .and(query_param("guid", "917393e3-1b1e-5cef-ace4-edaa54e1f810"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);

    let value = client.get_value_by_feed_id(920666).await.unwrap();
    let block = value.value.unwrap();
    assert_eq!(block.total_split(), 99.0);
    assert_eq!(block.model.unwrap().method.as_deref(), Some("keysend"));

    client
        .get_value_by_feed_url("https://feeds.podcastindex.org/pc20.xml")
        .await
        .unwrap();
    client
        .get_value_by_podcast_guid("917393e3-1b1e-5cef-ace4-edaa54e1f810")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_stats_and_categories() {
    let server = MockServer::start().await;

    mount_get(
        &server,
        "/stats/current",
        serde_json::json!({
            "status": "true",
            "stats": {"feedCountTotal": 4000000, "episodeCountTotal": 100000000},
            "description": "Index statistics"
        }),
    )
    .await;
    mount_get(
        &server,
        "/categories/list",
        serde_json::json!({
            "status": "true",
            "feeds": [{"id": 1, "name": "Arts"}, {"id": 2, "name": "Books"}],
            "count": 2,
            "description": "Categories"
        }),
    )
    .await;

    let client = build_client(&server);

    let stats = client.get_stats().await.unwrap();
    assert_eq!(stats.stats.feed_count_total, 4_000_000);
    assert_eq!(stats.stats.feeds_with_value_blocks, 0);

    let categories = client.get_categories().await.unwrap();
    assert_eq!(categories.count, 2);
    assert_eq!(categories.feeds[1].name, "Books");

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|request| request.url.query().is_none()));
}

#[tokio::test]
async fn test_add_by_itunes_id_posts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1.0/add/byitunesid"))
        .and(query_param("id", "123"))
        .and(body_json(serde_json::json!({"id": 123})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "true",
            "feedId": 5555,
            "existed": false,
            "description": "Feed added."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let added = client
        .add_by_itunes_id(&AddByItunesIdRequest::new(123))
        .await
        .unwrap();

    assert_eq!(added.feed_id, Some(5555));
    assert_eq!(added.existed, Some(false));
}

#[tokio::test]
async fn test_add_by_feed_url_posts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1.0/add/byfeedurl"))
        .and(query_param("url", "https://example.com/feed.xml"))
        .and(query_param_is_missing("chash"))
        .and(body_json(serde_json::json!({"url": "https://example.com/feed.xml"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "true",
            "feedId": 42,
            "existed": true,
            "description": "Feed already in index."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let added = client
        .add_by_feed_url(&AddByFeedUrlRequest::new("https://example.com/feed.xml"))
        .await
        .unwrap();

    assert_eq!(added.existed, Some(true));
}

#[tokio::test]
async fn test_hub_notify() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/hub/pubnotify"))
        .and(query_param("feedId", "920666"))
        .and(query_param_is_missing("feedUrl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": true,
            "description": "Feed marked for immediate update."
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let response = client
        .hub_notify(&HubNotifyRequest::feed_id(920666))
        .await
        .unwrap();

    assert_eq!(response.status, "true");
}
