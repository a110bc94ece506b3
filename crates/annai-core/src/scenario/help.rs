//! Canned help guides for trap-prone steps.
//!
//! A fixed set of step ids is known to trip users up; whenever the
//! conversation engine transitions into one of them it surfaces the matching
//! guide as a side channel, independent of the message log. This is advisory
//! UI state and never affects validation or branching.

use serde::Serialize;
use std::sync::OnceLock;

/// A canned help payload shown alongside a trap-prone step.
#[derive(Debug, Clone, Serialize)]
pub struct HelpGuide {
    /// Step id this guide is keyed by
    pub step_id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub steps: &'static [&'static str],
    pub tips: &'static [&'static str],
}

/// Static storage for the help guide table (initialized once).
static HELP_GUIDES: OnceLock<Vec<HelpGuide>> = OnceLock::new();

fn help_guides() -> &'static [HelpGuide] {
    HELP_GUIDES.get_or_init(|| {
        vec![
            HelpGuide {
                step_id: "svn-structure-check",
                title: "Subversionリポジトリ構造の調べ方",
                description: "ブランチ・タグの有無が分からない場合は、svn listコマンドで確認できます。",
                steps: &[
                    "ターミナルで svn list <repository-url> を実行",
                    "branches/ と tags/ ディレクトリの有無を確認",
                    "trunk（メインブランチ）の存在を確認",
                ],
                tips: &["標準レイアウトでは trunk/branches/tags の3ディレクトリ構成です"],
            },
            HelpGuide {
                step_id: "migration-execution",
                title: "移行コマンドの実行でつまずいたら",
                description: "svn2gitはRuby製ツールのため、事前に gem install svn2git が必要です。",
                steps: &[
                    "gem install svn2git でツールをインストール",
                    "authors.txt にSubversionユーザーとGitユーザーの対応を記述",
                    "svn2git <svn-repository-url> --authors authors.txt を実行",
                ],
                tips: &[
                    "大きなリポジトリでは移行に時間がかかります",
                    "git-svnを使う場合は git svn clone <url> --stdlayout",
                ],
            },
            HelpGuide {
                step_id: "ssh-key-generation",
                title: "SSH鍵の生成でつまずいたら",
                description: "既に鍵がある場合は新しく作る必要はありません。~/.ssh/ を確認してください。",
                steps: &[
                    "ls ~/.ssh/ で既存の鍵（id_ed25519.pub など）を確認",
                    "無ければ ssh-keygen -t ed25519 -C \"your_email@example.com\" を実行",
                    "保存場所はEnterでデフォルトのまま、パスフレーズは任意",
                ],
                tips: &["公開鍵は .pub の付いたファイルです。秘密鍵は絶対に共有しないでください"],
            },
            HelpGuide {
                step_id: "https-token-setup",
                title: "アクセストークンの作成でつまずいたら",
                description: "トークンは作成直後の一度しか表示されません。必ずコピーして保管してください。",
                steps: &[
                    "GitHub: Settings → Developer settings → Personal access tokens",
                    "GitLab: Preferences → Access Tokens",
                    "スコープは repo（GitHub）/ write_repository（GitLab）を選択",
                ],
                tips: &["トークンはパスワードの代わりに使用します。安全な場所に保管してください"],
            },
            HelpGuide {
                step_id: "remote-setup",
                title: "リモート設定でつまずいたら",
                description: "認証方法に応じたURL形式（SSH: git@...、HTTPS: https://...）を使います。",
                steps: &[
                    "リポジトリページの「Code」ボタンからURLをコピー",
                    "git remote add origin <url> を実行",
                    "git push -u origin main でプッシュ",
                ],
                tips: &[
                    "git remote -v で設定済みのリモートを確認できます",
                    "認証エラーの場合は鍵の登録またはトークンを見直してください",
                ],
            },
        ]
    })
}

/// Returns the canned help guide for a step, if the step is trap-prone.
pub fn help_guide_for(step_id: &str) -> Option<&'static HelpGuide> {
    help_guides().iter().find(|g| g.step_id == step_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trap_prone_steps_have_guides() {
        for id in [
            "svn-structure-check",
            "migration-execution",
            "ssh-key-generation",
            "https-token-setup",
            "remote-setup",
        ] {
            let guide = help_guide_for(id).expect("guide should exist");
            assert!(!guide.title.is_empty());
            assert!(!guide.steps.is_empty());
        }
    }

    #[test]
    fn test_unknown_step_has_no_guide() {
        assert!(help_guide_for("welcome").is_none());
    }

    #[test]
    fn test_guides_are_keyed_uniquely() {
        let mut ids = std::collections::HashSet::new();
        for guide in help_guides() {
            assert!(ids.insert(guide.step_id), "duplicate guide for {}", guide.step_id);
        }
    }
}
