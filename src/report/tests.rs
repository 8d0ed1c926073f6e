//! Tests for report module

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::analysis::BatchAggregator;
    use crate::error::AnalyzerError;
    use crate::report::chart::MockChartRenderer;
    use crate::types::{Emotion, SentimentLabel};
    use std::fs;

    fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn passthrough_renderer(calls: usize) -> MockChartRenderer {
        let mut renderer = MockChartRenderer::new();
        renderer
            .expect_render_bar_chart()
            .times(calls)
            .returning(|_, _, path| Ok(path.to_path_buf()));
        renderer
    }

    #[test]
    fn test_chart_paths_replace_extension() {
        let (sentiment, emotions) = chart_paths(Path::new("data/reviews.csv"), None);
        assert_eq!(sentiment, PathBuf::from("data/reviews_sentiment.png"));
        assert_eq!(emotions, PathBuf::from("data/reviews_emotions.png"));
    }

    #[test]
    fn test_chart_paths_without_extension_or_dir() {
        let (sentiment, emotions) = chart_paths(Path::new("reviews"), None);
        assert_eq!(sentiment, PathBuf::from("reviews_sentiment.png"));
        assert_eq!(emotions, PathBuf::from("reviews_emotions.png"));
    }

    #[test]
    fn test_chart_paths_output_dir() {
        let (sentiment, _) = chart_paths(Path::new("data/reviews.csv"), Some(Path::new("/tmp/out")));
        assert_eq!(sentiment, PathBuf::from("/tmp/out/reviews_sentiment.png"));
    }

    #[test]
    fn test_text_lines() {
        let result = TextAnalysis {
            sentiment: SentimentLabel::Negative,
            emotions: vec![Emotion::Anger, Emotion::Fear],
        };
        assert_eq!(
            text_lines(&result),
            vec!["Sentiment: negative", "Emotions: anger, fear"]
        );

        let quiet = TextAnalysis {
            sentiment: SentimentLabel::Neutral,
            emotions: vec![],
        };
        assert_eq!(text_lines(&quiet)[1], "Emotions: none");
    }

    #[test]
    fn test_summary_lines_limit_emotions() {
        let sentiment = FrequencyDistribution::from_entries(vec![("negative", 1), ("positive", 2)]);
        let emotions =
            FrequencyDistribution::from_entries(vec![("joy", 3), ("trust", 2), ("fear", 1)]);

        let lines = summary_lines(&sentiment, &emotions, 2);
        assert_eq!(
            lines,
            vec![
                "Sentiment distribution:",
                "  negative: 1",
                "  positive: 2",
                "Top emotions (top 2):",
                "  joy: 3",
                "  trust: 2",
            ]
        );
    }

    #[test]
    fn test_vec_sink_collects_lines() {
        let mut sink: Vec<String> = Vec::new();
        sink.display(&["a".to_string(), "b".to_string()]);
        sink.display(&["c".to_string()]);
        assert_eq!(sink, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_run_batch_renders_both_charts() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(
            dir.path(),
            "reviews.csv",
            "id,Comment\n1,I love this!\n2,I hate this.\n3,It is a table.\n",
        );

        let mut renderer = MockChartRenderer::new();
        let expected_sentiment = dir.path().join("reviews_sentiment.png");
        let expected_emotions = dir.path().join("reviews_emotions.png");
        renderer
            .expect_render_bar_chart()
            .withf(move |dist, title, path| {
                path.to_path_buf() == expected_sentiment
                    && title.to_string() == "Sentiment Distribution"
                    && dist.total() == 3
            })
            .times(1)
            .returning(|_, _, path| Ok(path.to_path_buf()));
        renderer
            .expect_render_bar_chart()
            .withf(move |_, title, path| {
                path.to_path_buf() == expected_emotions
                    && title.to_string() == "Top Emotions (Top 10)"
            })
            .times(1)
            .returning(|_, _, path| Ok(path.to_path_buf()));

        let (report, analysis) = run_batch(
            &BatchAggregator::new(),
            &renderer,
            &input,
            &BatchOptions::default(),
        )
        .unwrap();

        assert_eq!(report.text_column, "Comment");
        assert_eq!(report.rows, 3);
        assert_eq!(report.charts.len(), 2);
        assert_eq!(analysis.headers, vec!["id", "text"]);
        assert_eq!(report.sentiment.keys(), vec!["negative", "neutral", "positive"]);
    }

    #[test]
    fn test_run_batch_trims_emotions_to_top_n() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(
            dir.path(),
            "feelings.csv",
            "text\nI am furious and terrified\n\"What a happy surprise, I trust you\"\n",
        );
        let options = BatchOptions {
            top_emotions: 2,
            render_charts: false,
            ..BatchOptions::default()
        };

        let (report, analysis) = run_batch(
            &BatchAggregator::new(),
            &passthrough_renderer(0),
            &input,
            &options,
        )
        .unwrap();

        assert!(analysis.emotions.len() > 2);
        assert_eq!(report.emotions.len(), 2);
        assert_eq!(report.top_n, 2);
        assert!(report.charts.is_empty());
    }

    #[test]
    fn test_run_batch_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), "bad.csv", "id,body\n1,hello\n");

        let err = run_batch(
            &BatchAggregator::new(),
            &passthrough_renderer(0),
            &input,
            &BatchOptions::default(),
        )
        .unwrap_err();

        match err {
            AnalyzerError::MissingTextColumn { available } => {
                assert_eq!(available, vec!["id", "body"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_run_batch_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_batch(
            &BatchAggregator::new(),
            &passthrough_renderer(0),
            &dir.path().join("nope.csv"),
            &BatchOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AnalyzerError::UnreadableInput(_)));
    }

    #[test]
    fn test_run_batch_rejects_blank_text_cell() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), "gaps.csv", "id,review\n1,I love this!\n2,\n");

        let err = run_batch(
            &BatchAggregator::new(),
            &passthrough_renderer(0),
            &input,
            &BatchOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AnalyzerError::EmptyText { row: 2 }));
    }

    #[test]
    fn test_run_batch_propagates_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), "r.csv", "text\ngood\n");

        let mut renderer = MockChartRenderer::new();
        renderer
            .expect_render_bar_chart()
            .times(1)
            .returning(|_, _, _| Err(AnalyzerError::Render("disk full".to_string())));

        let err = run_batch(
            &BatchAggregator::new(),
            &renderer,
            &input,
            &BatchOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AnalyzerError::Render(_)));
    }

    #[test]
    fn test_report_serializes_ordered_maps() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), "s.csv", "review\nI love this!\nI hate this.\n");

        let (report, _) = run_batch(
            &BatchAggregator::new(),
            &passthrough_renderer(2),
            &input,
            &BatchOptions::default(),
        )
        .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rows"], 2);
        assert_eq!(json["text_column"], "review");
        assert_eq!(json["sentiment"]["positive"], 1);
        assert_eq!(json["sentiment"]["negative"], 1);
        assert!(json["generated_at"].is_string());
        assert_eq!(json["charts"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_report_lines() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), "l.csv", "text\nI love this!\n");

        let (report, _) = run_batch(
            &BatchAggregator::new(),
            &passthrough_renderer(2),
            &input,
            &BatchOptions::default(),
        )
        .unwrap();

        let lines = report.lines();
        assert_eq!(lines[0], "Analyzed 1 rows from column 'text'");
        assert!(lines.contains(&"  positive: 1".to_string()));
        assert!(lines.contains(&"Top emotions (top 10):".to_string()));
        assert!(lines.last().unwrap().starts_with("Chart saved: "));
    }

    #[test]
    fn test_end_to_end_with_bitmap_renderer() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(
            dir.path(),
            "reviews.csv",
            "Review\nI love this!\nI hate this.\nIt is a table.\n",
        );
        let out = dir.path().join("charts");
        fs::create_dir(&out).unwrap();

        let options = BatchOptions {
            output_dir: Some(out.clone()),
            ..BatchOptions::default()
        };
        let (report, _) =
            run_batch(&BatchAggregator::new(), &BarChartRenderer::default(), &input, &options)
                .unwrap();

        assert_eq!(
            report.charts,
            vec![out.join("reviews_sentiment.png"), out.join("reviews_emotions.png")]
        );
        for chart in &report.charts {
            assert!(chart.exists());
        }
    }

    #[tokio::test]
    async fn test_run_batch_in_background() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), "bg.csv", "text\nI love this!\nI hate this.\n");

        let (report, analysis) = run_batch_in_background(
            Arc::new(BatchAggregator::new()),
            Arc::new(passthrough_renderer(2)),
            input,
            BatchOptions::default(),
        )
        .await
        .unwrap();

        assert_eq!(report.rows, 2);
        assert_eq!(analysis.sentiment.total(), 2);
    }
}
