//! テスト用の記録スタブと組み立てヘルパー

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use common::adapter::NoopLog;
use common::error::Error;
use common::geo::{Coordinate, Region};
use common::places::{Place, PlaceSearchProvider, SearchRequest};
use common::point_id::IdGenerator;

use crate::domain::PointOfInterest;
use crate::ports::outbound::{
    Annotation, LocationEvent, LocationProvider, MapCanvas, NamePrompt, NavigationLauncher,
    RowView, ShareSink,
};
use crate::usecase::{ObsDeps, PolicyDeps, ScreenDeps, ServiceDeps, TreasureScreen, ViewDeps};

/// 地図キャンバスの記録スタブ
#[derive(Default)]
pub struct RecordingCanvas {
    pub renders: Mutex<Vec<Vec<Annotation>>>,
    pub recenters: Mutex<Vec<Region>>,
}

impl RecordingCanvas {
    pub fn render_count(&self) -> usize {
        self.renders.lock().unwrap().len()
    }

    pub fn last_titles(&self) -> Vec<String> {
        self.renders
            .lock()
            .unwrap()
            .last()
            .map(|annotations| annotations.iter().map(|a| a.title.clone()).collect())
            .unwrap_or_default()
    }

    pub fn last_recenter(&self) -> Option<Region> {
        self.recenters.lock().unwrap().last().copied()
    }
}

impl MapCanvas for RecordingCanvas {
    fn render_annotations(&self, annotations: &[Annotation]) -> Result<(), Error> {
        self.renders.lock().unwrap().push(annotations.to_vec());
        Ok(())
    }

    fn recenter(&self, region: &Region) -> Result<(), Error> {
        self.recenters.lock().unwrap().push(*region);
        Ok(())
    }
}

/// 行リストの記録スタブ
#[derive(Default)]
pub struct RecordingRows {
    pub renders: Mutex<Vec<Vec<PointOfInterest>>>,
}

impl RecordingRows {
    pub fn render_count(&self) -> usize {
        self.renders.lock().unwrap().len()
    }

    pub fn last_names(&self) -> Vec<String> {
        self.renders
            .lock()
            .unwrap()
            .last()
            .map(|rows| rows.iter().map(|p| p.name().to_string()).collect())
            .unwrap_or_default()
    }
}

impl RowView for RecordingRows {
    fn render_rows(&self, rows: &[PointOfInterest]) -> Result<(), Error> {
        self.renders.lock().unwrap().push(rows.to_vec());
        Ok(())
    }
}

/// 共有の記録スタブ
#[derive(Default)]
pub struct RecordingShare {
    pub texts: Mutex<Vec<String>>,
}

impl ShareSink for RecordingShare {
    fn share(&self, text: &str) -> Result<(), Error> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// ナビゲーション起動の記録スタブ
#[derive(Default)]
pub struct RecordingNavigation {
    pub destinations: Mutex<Vec<Coordinate>>,
    fail: std::sync::atomic::AtomicBool,
}

impl RecordingNavigation {
    pub fn set_fail(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

impl NavigationLauncher for RecordingNavigation {
    fn open_driving_directions(&self, destination: Coordinate) -> Result<(), Error> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::launch_failed("no handler for externalmaps:"));
        }
        self.destinations.lock().unwrap().push(destination);
        Ok(())
    }
}

/// 固定の結果（または失敗）を返すプレイス検索スタブ
pub struct StubPlaces {
    pub result: Result<Vec<Place>, Error>,
    pub requests: Mutex<Vec<SearchRequest>>,
}

impl StubPlaces {
    pub fn ok(places: Vec<Place>) -> Self {
        Self {
            result: Ok(places),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(Error::search_failed(message)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn last_query(&self) -> Option<String> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .map(|r| r.query.clone())
    }
}

impl PlaceSearchProvider for StubPlaces {
    fn name(&self) -> &str {
        "stub"
    }

    fn search(&self, request: &SearchRequest) -> Result<Vec<Place>, Error> {
        self.requests.lock().unwrap().push(request.clone());
        self.result.clone()
    }
}

/// 固定のイベント列を届ける位置情報スタブ
pub struct StubLocation {
    pub events: Vec<LocationEvent>,
}

impl LocationProvider for StubLocation {
    fn request_location(
        &self,
        callback: &mut dyn FnMut(LocationEvent) -> Result<(), Error>,
    ) -> Result<(), Error> {
        for event in &self.events {
            callback(event.clone())?;
        }
        Ok(())
    }
}

/// 固定の応答列を順に返す名前プロンプトスタブ。尽きたら None。
pub struct QueueNamePrompt {
    answers: Mutex<Vec<Option<String>>>,
}

impl QueueNamePrompt {
    pub fn with(answers: Vec<Option<&str>>) -> Self {
        Self {
            answers: Mutex::new(
                answers
                    .into_iter()
                    .map(|a| a.map(|s| s.to_string()))
                    .collect(),
            ),
        }
    }
}

impl NamePrompt for QueueNamePrompt {
    fn ask_name(&self) -> Result<Option<String>, Error> {
        let mut answers = self.answers.lock().unwrap();
        if answers.is_empty() {
            Ok(None)
        } else {
            Ok(answers.remove(0))
        }
    }
}

/// 連番ID（"p1", "p2", ...）を返す IdGenerator スタブ
#[derive(Default)]
pub struct SeqIdGenerator {
    counter: AtomicU64,
}

impl IdGenerator for SeqIdGenerator {
    fn generate(&self) -> String {
        format!("p{}", self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// 記録スタブ一式で組んだスクリーン
pub struct Harness {
    pub screen: TreasureScreen,
    pub canvas: Arc<RecordingCanvas>,
    pub rows: Arc<RecordingRows>,
    pub share: Arc<RecordingShare>,
    pub navigation: Arc<RecordingNavigation>,
    pub places: Arc<StubPlaces>,
}

impl Harness {
    pub fn new() -> Self {
        Self::build(StubPlaces::ok(Vec::new()), vec![LocationEvent::Denied], Vec::new())
    }

    pub fn build(
        places: StubPlaces,
        location_events: Vec<LocationEvent>,
        prompt_answers: Vec<Option<&str>>,
    ) -> Self {
        let canvas = Arc::new(RecordingCanvas::default());
        let rows = Arc::new(RecordingRows::default());
        let share = Arc::new(RecordingShare::default());
        let navigation = Arc::new(RecordingNavigation::default());
        let places = Arc::new(places);
        let deps = ScreenDeps {
            views: ViewDeps {
                rows: Arc::clone(&rows) as Arc<dyn RowView>,
                share: Arc::clone(&share) as Arc<dyn ShareSink>,
            },
            services: ServiceDeps {
                places: Arc::clone(&places) as Arc<dyn PlaceSearchProvider>,
                location: Arc::new(StubLocation {
                    events: location_events,
                }),
                navigation: Arc::clone(&navigation) as Arc<dyn NavigationLauncher>,
            },
            policy: PolicyDeps {
                name_prompt: Arc::new(QueueNamePrompt::with(prompt_answers)),
                id_gen: Arc::new(SeqIdGenerator::default()),
            },
            obs: ObsDeps {
                log: Arc::new(NoopLog),
            },
        };
        let screen = TreasureScreen::new(Arc::clone(&canvas) as Arc<dyn MapCanvas>, deps);
        Self {
            screen,
            canvas,
            rows,
            share,
            navigation,
            places,
        }
    }
}
