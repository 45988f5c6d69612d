use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::models::{Profile, Repository};
use crate::services::FavoritesService;
use crate::ui::fetch::FetchState;
use crate::ui::layout::search_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FAVORITE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};

use super::state::GitHubScreenState;

pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GitHubScreenState,
    favorites: &FavoritesService,
) {
    let (search, content) = search_regions(area);

    let input = if state.username.is_empty() {
        Line::styled("GitHub username", Style::default().fg(MUTED_TEXT))
    } else {
        Line::styled(format!("{}▏", state.username), Style::default().fg(HEADER_TEXT))
    };
    frame.render_widget(
        Paragraph::new(input).block(
            Block::default()
                .title(" GitHub Browser ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        ),
        search,
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(content);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    match &state.fetch {
        FetchState::Initial => message(
            frame,
            columns[0],
            block,
            "Search GitHub Users",
            "Enter a username to get started",
            MUTED_TEXT,
        ),
        FetchState::Loading { .. } => {
            message(frame, columns[0], block, "Fetching data...", "", MUTED_TEXT)
        }
        FetchState::Error(text) => message(frame, columns[0], block, "Error", text, STATUS_ERROR),
        FetchState::Loaded(profile) => {
            render_profile(frame, columns[0], block, profile, state.selected, favorites)
        }
    }

    render_favorites(frame, columns[1], favorites);
}

fn message(
    frame: &mut Frame<'_>,
    area: Rect,
    block: Block<'_>,
    title: &str,
    detail: &str,
    detail_color: ratatui::style::Color,
) {
    let lines = vec![
        Line::from(""),
        Line::styled(title.to_string(), Style::default().fg(HEADER_TEXT)),
        Line::styled(detail.to_string(), Style::default().fg(detail_color)),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}

fn render_profile(
    frame: &mut Frame<'_>,
    area: Rect,
    block: Block<'_>,
    profile: &Profile,
    selected: usize,
    favorites: &FavoritesService,
) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(inner);

    let user = &profile.user;
    let mut lines = vec![Line::styled(
        user.display_name().to_string(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )];
    if let Some(bio) = &user.bio {
        lines.push(Line::styled(bio.clone(), Style::default().fg(MUTED_TEXT)));
    }
    lines.push(Line::styled(
        format!("{} public repositories", user.public_repos),
        Style::default().fg(MUTED_TEXT),
    ));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        parts[0],
    );

    let items: Vec<ListItem> = profile
        .repositories
        .iter()
        .map(|repo| repository_row(repo, favorites.is_favorite(repo)))
        .collect();
    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(
        List::new(items)
            .block(Block::default().title(" Repositories ").borders(Borders::TOP))
            .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT)),
        parts[1],
        &mut list_state,
    );
}

fn repository_row(repo: &Repository, favorite: bool) -> ListItem<'static> {
    let heart = if favorite {
        Span::styled("♥ ", Style::default().fg(FAVORITE))
    } else {
        Span::styled("♡ ", Style::default().fg(MUTED_TEXT))
    };
    let mut lines = vec![Line::from(vec![
        heart,
        Span::styled(
            repo.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
    ])];
    if let Some(description) = &repo.description {
        lines.push(Line::styled(
            format!("  {description}"),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    let mut meta = format!("  ★ {}  ⑂ {}", repo.stargazers_count, repo.forks_count);
    if let Some(language) = &repo.language {
        meta.push_str(&format!("  [{language}]"));
    }
    lines.push(Line::styled(meta, Style::default().fg(MUTED_TEXT)));
    ListItem::new(lines)
}

fn render_favorites(frame: &mut Frame<'_>, area: Rect, favorites: &FavoritesService) {
    let items: Vec<ListItem> = favorites
        .favorites()
        .iter()
        .map(|repo| {
            ListItem::new(Line::from(vec![
                Span::styled("♥ ", Style::default().fg(FAVORITE)),
                Span::styled(repo.name.clone(), Style::default().fg(HEADER_TEXT)),
            ]))
        })
        .collect();
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .title(format!(" Favorites ({}) ", favorites.favorites().len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GitHubUser;
    use crate::services::ServiceError;
    use crate::storage::MemoryStore;
    use crate::ui::fetch::{FetchIntent, RequestTokens};
    use crate::ui::mvi::Reducer;
    use crate::ui::screens::github::{GitHubIntent, GitHubReducer};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn octocat() -> Profile {
        let repositories = (1..=2)
            .map(|id| Repository {
                id,
                name: format!("repo-{id}"),
                description: None,
                language: Some("Ruby".to_string()),
                stargazers_count: 10 - id as u32,
                forks_count: 0,
                html_url: format!("https://github.com/octocat/repo-{id}"),
            })
            .collect();
        Profile {
            user: GitHubUser {
                id: 583231,
                login: "octocat".to_string(),
                name: Some("The Octocat".to_string()),
                bio: None,
                avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
                public_repos: 8,
            },
            repositories,
        }
    }

    fn finished(outcome: Result<Profile, ServiceError>) -> GitHubScreenState {
        let token = RequestTokens::new().issue();
        let state = GitHubReducer::reduce(
            GitHubScreenState::default(),
            GitHubIntent::Fetch(FetchIntent::Start { token }),
        );
        let intent = match outcome {
            Ok(value) => FetchIntent::Succeeded { token, value },
            Err(err) => FetchIntent::Failed {
                token,
                message: err.to_string(),
            },
        };
        GitHubReducer::reduce(state, GitHubIntent::Fetch(intent))
    }

    fn rendered(state: &GitHubScreenState) -> String {
        let favorites = FavoritesService::load(Box::new(MemoryStore::new()));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), state, &favorites))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn loaded_profile_shows_public_repository_count() {
        let text = rendered(&finished(Ok(octocat())));
        assert!(text.contains("8 public repositories"));
        assert!(text.contains("The Octocat"));
        assert!(text.contains("repo-1"));
    }

    #[test]
    fn missing_user_shows_not_found_message() {
        let text = rendered(&finished(Err(ServiceError::NotFound)));
        assert!(text.contains("User not found"));
        assert!(!text.contains("public repositories"));
    }
}
