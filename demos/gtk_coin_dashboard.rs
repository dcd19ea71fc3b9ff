#[cfg(feature = "desktop")]
fn main() {
    dashboard::run();
}

#[cfg(not(feature = "desktop"))]
fn main() {
    println!("run with: cargo run --features desktop --example gtk_coin_dashboard");
}

#[cfg(feature = "desktop")]
mod dashboard {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::mpsc::{self, Receiver, TryRecvError};
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::Duration;

    use coin_chart::api::{
        ChartEngine, ChartEngineConfig, HistoryRequest, StatusEvent, StatusKind,
    };
    use coin_chart::core::{PriceHistory, Viewport};
    use coin_chart::market::{CoinGeckoClient, CoinSummary, CoinTable, MarketClientConfig};
    use coin_chart::platform_gtk::GtkChartAdapter;
    use coin_chart::render::CairoRenderer;
    use gtk4 as gtk;
    use gtk4::glib;
    use gtk4::prelude::*;

    const STATUS_CLEAR_SECS: u32 = 5;

    type SharedClient = Arc<Mutex<CoinGeckoClient>>;

    pub fn run() {
        let _ = coin_chart::telemetry::init_default_tracing();
        let app = gtk::Application::builder()
            .application_id("rs.coin_chart.demos.dashboard")
            .build();
        app.connect_activate(build_ui);
        let _ = app.run();
    }

    fn build_ui(app: &gtk::Application) {
        let client = match CoinGeckoClient::new(MarketClientConfig::default()) {
            Ok(client) => Arc::new(Mutex::new(client)),
            Err(err) => {
                eprintln!("failed to create market client: {err}");
                return;
            }
        };
        let engine = match CairoRenderer::new(800, 480).and_then(|renderer| {
            ChartEngine::new(renderer, ChartEngineConfig::new(Viewport::new(800, 480)))
        }) {
            Ok(engine) => engine,
            Err(err) => {
                eprintln!("failed to initialize chart engine: {err}");
                return;
            }
        };

        let adapter = GtkChartAdapter::new(engine);
        let table = Rc::new(RefCell::new(CoinTable::default()));

        let status = gtk::Label::new(Some("Ready"));
        status.set_xalign(0.0);

        let search = gtk::SearchEntry::new();
        let refresh = gtk::Button::with_label("Refresh");
        let theme = gtk::Button::with_label("Toggle theme");
        let toolbar = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        toolbar.append(&search);
        toolbar.append(&refresh);
        toolbar.append(&theme);

        let coin_list = gtk::ListBox::new();
        let scroller = gtk::ScrolledWindow::builder()
            .child(&coin_list)
            .min_content_width(280)
            .build();

        let content = gtk::Paned::new(gtk::Orientation::Horizontal);
        content.set_start_child(Some(&scroller));
        content.set_end_child(Some(adapter.widget()));
        content.set_vexpand(true);

        let layout = gtk::Box::new(gtk::Orientation::Vertical, 6);
        layout.append(&toolbar);
        layout.append(&content);
        layout.append(&status);

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("coin-chart | Top coins")
            .default_width(1200)
            .default_height(720)
            .build();
        window.set_child(Some(&layout));
        window.present();

        {
            let table = Rc::clone(&table);
            let coin_list = coin_list.clone();
            search.connect_search_changed(move |entry| {
                table.borrow_mut().search(entry.text().as_str());
                fill_coin_list(&coin_list, table.borrow().rows());
            });
        }
        {
            let adapter = Rc::clone(&adapter);
            let status = status.clone();
            theme.connect_clicked(move |_| show_status(&status, &adapter.toggle_theme()));
        }
        {
            let client = Arc::clone(&client);
            let adapter = Rc::clone(&adapter);
            let table = Rc::clone(&table);
            let status = status.clone();
            coin_list.connect_row_activated(move |_, row| {
                let Ok(index) = usize::try_from(row.index()) else {
                    return;
                };
                let Some(coin) = table.borrow().rows().get(index).cloned() else {
                    return;
                };
                let (request, loading) = adapter.begin_loading(&coin.name);
                show_status(&status, &loading);
                load_history(&client, &adapter, &status, request, coin);
            });
        }
        {
            let client = Arc::clone(&client);
            let table = Rc::clone(&table);
            let coin_list = coin_list.clone();
            let status = status.clone();
            refresh.connect_clicked(move |_| {
                load_top_coins(&client, &table, &coin_list, &status);
            });
        }
        load_top_coins(&client, &table, &coin_list, &status);
    }

    fn load_top_coins(
        client: &SharedClient,
        table: &Rc<RefCell<CoinTable>>,
        coin_list: &gtk::ListBox,
        status: &gtk::Label,
    ) {
        show_status(status, &StatusEvent::info("Fetching market data..."));
        let client = Arc::clone(client);
        let receiver = spawn_fetch(move || {
            let mut client = client.lock().ok()?;
            let limit = client.config().top_coin_limit;
            client.get_top_coins_or_none(limit)
        });

        let table = Rc::clone(table);
        let coin_list = coin_list.clone();
        let status = status.clone();
        deliver_on_main(receiver, move |coins| {
            let event = match coins {
                Some(coins) => {
                    let count = coins.len();
                    table.borrow_mut().set_coins(coins);
                    fill_coin_list(&coin_list, table.borrow().rows());
                    StatusEvent::success(format!("Loaded {count} coins"))
                }
                None => StatusEvent::error("Failed to fetch market data"),
            };
            show_status(&status, &event);
        });
    }

    fn load_history(
        client: &SharedClient,
        adapter: &Rc<GtkChartAdapter<CairoRenderer>>,
        status: &gtk::Label,
        request: HistoryRequest,
        coin: CoinSummary,
    ) {
        let client = Arc::clone(client);
        let coin_id = coin.id.clone();
        let receiver = spawn_fetch(move || -> Option<PriceHistory> {
            client.lock().ok()?.get_history_or_none(&coin_id)
        });

        let adapter = Rc::clone(adapter);
        let status = status.clone();
        deliver_on_main(receiver, move |history| {
            if let Some(event) = adapter.apply_requested_history(request, &coin.name, history) {
                show_status(&status, &event);
            }
        });
    }

    fn spawn_fetch<T, F>(fetch: F) -> Receiver<Option<T>>
    where
        T: Send + 'static,
        F: FnOnce() -> Option<T> + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let _ = sender.send(fetch());
        });
        receiver
    }

    /// Polls `receiver` from the GTK main loop and hands the value to `apply`.
    fn deliver_on_main<T, F>(receiver: Receiver<Option<T>>, apply: F)
    where
        T: 'static,
        F: FnOnce(Option<T>) + 'static,
    {
        let mut apply = Some(apply);
        glib::timeout_add_local(Duration::from_millis(50), move || {
            let value = match receiver.try_recv() {
                Ok(value) => value,
                Err(TryRecvError::Empty) => return glib::ControlFlow::Continue,
                Err(TryRecvError::Disconnected) => None,
            };
            if let Some(apply) = apply.take() {
                apply(value);
            }
            glib::ControlFlow::Break
        });
    }

    fn fill_coin_list(coin_list: &gtk::ListBox, coins: &[CoinSummary]) {
        coin_list.remove_all();
        for coin in coins {
            let label = gtk::Label::new(Some(&format!(
                "{:>3}  {}  {}",
                coin.rank,
                coin.display_name(),
                coin_chart::api::price_format::format_price(coin.price)
            )));
            label.set_xalign(0.0);
            coin_list.append(&label);
        }
    }

    fn show_status(status: &gtk::Label, event: &StatusEvent) {
        let prefix = match event.kind {
            StatusKind::Success => "✓",
            StatusKind::Error => "✗",
            StatusKind::Info => "ℹ",
            StatusKind::Warning => "!",
        };
        status.set_text(&format!("{prefix} {}", event.message));

        let status = status.clone();
        let shown = event.message.clone();
        glib::timeout_add_seconds_local_once(STATUS_CLEAR_SECS, move || {
            if status.text().ends_with(shown.as_str()) {
                status.set_text("Ready");
            }
        });
    }
}
